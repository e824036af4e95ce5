//! Cursor position and internal scrolling for the composer's text box.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset. The text
//! itself is owned by `Composer` and passed in explicitly.

use ratatui::layout::{Position, Rect};

use super::text_wrap::{columns, wrap_line_count, wrap_options, wrapped_lines};

pub(super) struct CursorState {
    /// Byte offset in the text (0..=len), always on a char boundary
    pub pos: usize,
    /// First wrapped line shown once the text outgrows the box
    pub scroll_offset: u16,
    /// Text width at the last render, used for vertical movement
    pub last_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 60;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Byte offset in `text` where each of its wrapped `lines` starts.
    fn line_starts(text: &str, lines: &[String]) -> Vec<usize> {
        let mut starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in lines {
            starts.push(offset);
            offset = (offset + line.len()).min(text.len());
            // Spaces dropped at a soft break, then one newline at a hard one
            let rest = &text[offset..];
            offset += rest.len() - rest.trim_start_matches(' ').len();
            if text[offset..].starts_with('\n') {
                offset += 1;
            }
        }
        starts
    }

    /// Wrapped line (0-based) the cursor is on.
    pub fn line(&self, text: &str, width: u16) -> u16 {
        if width == 0 {
            return 0;
        }
        let before = &text[..self.pos];
        let mut line = wrap_line_count(before, width).saturating_sub(1);
        // A space that ended up on the next line
        if before.ends_with(' ')
            && wrap_line_count(&format!("{before}x"), width) > line + 1
        {
            line += 1;
        }
        line
    }

    /// Move to the same column on the previous (`-1`) or next (`1`) wrapped
    /// line. Returns `false` at the first or last line.
    pub fn move_vertically(&mut self, text: &str, direction: i16, width: u16) -> bool {
        if width == 0 || text.is_empty() {
            return false;
        }
        let lines = wrapped_lines(text, width);
        let starts = Self::line_starts(text, &lines);
        let current = starts
            .iter()
            .rposition(|&start| start <= self.pos)
            .unwrap_or(0);
        let target = match direction {
            d if d < 0 && current > 0 => current - 1,
            d if d > 0 && current + 1 < lines.len() => current + 1,
            _ => return false,
        };
        let column = self.pos - starts[current];
        let mut pos = starts[target] + column.min(lines[target].len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.pos = pos;
        true
    }

    /// Keep the cursor's line within `visible` rows.
    pub fn update_scroll_offset(&mut self, text: &str, width: u16, visible: u16) {
        let total = wrap_line_count(text, width);
        if total <= visible {
            self.scroll_offset = 0;
            return;
        }
        let line = self.line(text, width);
        let visible = visible.max(1);
        if line < self.scroll_offset {
            self.scroll_offset = line;
        } else if line >= self.scroll_offset + visible {
            self.scroll_offset = line + 1 - visible;
        }
        self.scroll_offset = self.scroll_offset.min(total - visible);
    }

    /// Terminal cell for the cursor inside the text `area`. Each wrapped
    /// line occupies `line_height` rows.
    pub fn screen_pos(&self, text: &str, area: Rect, line_height: u16) -> Position {
        let width = area.width;
        if width == 0 {
            return area.as_position();
        }
        let before = &text[..self.pos];
        let logical = &before[before.rfind('\n').map_or(0, |i| i + 1)..];
        let segments = textwrap::wrap(logical, wrap_options(width));
        let consumed: u16 = segments
            .iter()
            .take(segments.len().saturating_sub(1))
            .map(|segment| columns(segment) + 1)
            .sum();
        let column = columns(logical).saturating_sub(consumed).min(width - 1);

        let row = self.line(text, width).saturating_sub(self.scroll_offset) * line_height;
        Position::new(area.x + column, area.y + row.min(area.height.saturating_sub(1)))
    }
}
