//! Wrapping and boundary helpers for the composer's text box.
//!
//! Measurement and rendering share [`wrap_options`], so the height computed
//! by the auto-resizer always matches what is drawn.

use unicode_width::UnicodeWidthStr;

/// textwrap options for a text box `width` columns wide.
pub(super) fn wrap_options(width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Wrapped lines of `text` at `width`, one entry per rendered line.
///
/// A trailing newline yields a final empty line so the cursor has
/// somewhere to sit.
pub(super) fn wrapped_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![String::new()];
    }
    let mut lines: Vec<String> = textwrap::wrap(text, wrap_options(width))
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if text.ends_with('\n') && !lines.last().is_some_and(|l| l.is_empty()) {
        lines.push(String::new());
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Number of wrapped lines for `text` at `width`; never less than 1.
pub(super) fn wrap_line_count(text: &str, width: u16) -> u16 {
    wrapped_lines(text, width).len() as u16
}

/// Display columns of `text`.
pub(super) fn columns(text: &str) -> u16 {
    text.width() as u16
}

pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map_or(0, |(i, _)| i)
}

pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map_or(text.len(), |(i, _)| pos + i)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `pos`: skip non-word characters backwards, then
/// word characters (readline `backward-word`).
pub(super) fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[..pos].char_indices().rev().peekable();
    while chars.next_if(|&(_, c)| !is_word_char(c)).is_some() {}
    let mut boundary = 0;
    for (i, c) in chars {
        if !is_word_char(c) {
            return i + c.len_utf8();
        }
        boundary = i;
    }
    boundary
}

/// End of the word after `pos` (readline `forward-word`).
pub(super) fn next_word_boundary(text: &str, pos: usize) -> usize {
    let mut chars = text[pos..].char_indices().peekable();
    while chars.next_if(|&(_, c)| !is_word_char(c)).is_some() {}
    while chars.next_if(|&(_, c)| is_word_char(c)).is_some() {}
    chars.peek().map_or(text.len(), |&(i, _)| pos + i)
}

/// Start of the logical (newline-delimited) line containing `pos`.
pub(super) fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

/// End of the logical line containing `pos`.
pub(super) fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}
