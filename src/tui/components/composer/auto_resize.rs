//! Text box height as a function of its content.
//!
//! ```text
//! lines <= 1  →  single_line_height
//! lines  > 1  →  min(lines * line_height + padding, max_height)
//! ```
//!
//! Past `max_height` the box stops growing and scrolls internally.

use crate::core::config::TextBoxSizing;

use super::text_wrap::wrap_line_count;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoResize {
    pub sizing: TextBoxSizing,
}

impl AutoResize {
    pub fn new(sizing: TextBoxSizing) -> Self {
        Self { sizing }
    }

    /// Rows for text that wraps to `lines` lines.
    pub fn height_for_lines(&self, lines: u16) -> u16 {
        let TextBoxSizing {
            line_height,
            single_line_height,
            padding,
            max_height,
        } = self.sizing;
        if lines <= 1 {
            return single_line_height;
        }
        lines
            .saturating_mul(line_height)
            .saturating_add(padding)
            .min(max_height)
    }

    /// Rows for `text` in a box `width` columns wide.
    pub fn height(&self, text: &str, width: u16) -> u16 {
        self.height_for_lines(wrap_line_count(text, width))
    }

    /// Wrapped lines that fit in a box of `height` rows holding `lines` lines.
    pub fn visible_lines(&self, lines: u16, height: u16) -> u16 {
        if lines <= 1 {
            return 1;
        }
        let rows = height.saturating_sub(self.sizing.padding);
        (rows / self.sizing.line_height.max(1)).clamp(1, lines)
    }
}
