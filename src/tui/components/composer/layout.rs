//! Composer layout modes.
//!
//! ```text
//! SingleLine:  [+]  text....................  [mic]  [send]
//!
//! MultiLine:   text..............................................
//!              text..............................................
//!              [+]                                  [mic] [send]
//! ```
//!
//! The mode depends only on how many lines the text wraps to.

use ratatui::layout::{Constraint, Layout, Rect};

/// Columns taken by each control glyph
pub const CONTROL_WIDTH: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    SingleLine,
    MultiLine,
}

/// Where each part of the composer goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComposerAreas {
    pub badges: Rect,
    pub text: Rect,
    pub trigger: Rect,
    pub mic: Rect,
    pub trailing: Rect,
}

impl LayoutMode {
    pub fn for_lines(lines: u16) -> Self {
        if lines <= 1 {
            LayoutMode::SingleLine
        } else {
            LayoutMode::MultiLine
        }
    }

    pub fn gap(self) -> u16 {
        match self {
            LayoutMode::SingleLine => 2,
            LayoutMode::MultiLine => 1,
        }
    }

    /// Columns left for the text in a row `width` wide.
    pub fn text_width(self, width: u16) -> u16 {
        match self {
            LayoutMode::SingleLine => width.saturating_sub(3 * CONTROL_WIDTH + 3 * self.gap()),
            LayoutMode::MultiLine => width,
        }
    }

    /// Rows below the text used by the controls.
    pub fn controls_height(self) -> u16 {
        match self {
            LayoutMode::SingleLine => 0,
            LayoutMode::MultiLine => 1,
        }
    }

    /// Split `inner` into badge strip, text and controls.
    pub fn split(self, inner: Rect, badge_rows: u16, text_height: u16) -> ComposerAreas {
        use Constraint::{Fill, Length};

        let [badges, body, controls] = Layout::vertical([
            Length(badge_rows),
            Length(text_height),
            Length(self.controls_height()),
        ])
        .areas(inner);

        let gap = self.gap();
        match self {
            LayoutMode::SingleLine => {
                let [trigger, text, mic, trailing] = Layout::horizontal([
                    Length(CONTROL_WIDTH),
                    Fill(1),
                    Length(CONTROL_WIDTH),
                    Length(CONTROL_WIDTH),
                ])
                .spacing(gap)
                .areas(body);
                // Controls sit on the last row of a tall single-line box
                let last_row = |r: Rect| Rect {
                    y: r.bottom().saturating_sub(1).max(r.y),
                    height: r.height.min(1),
                    ..r
                };
                ComposerAreas {
                    badges,
                    text,
                    trigger: last_row(trigger),
                    mic: last_row(mic),
                    trailing: last_row(trailing),
                }
            }
            LayoutMode::MultiLine => {
                let [trigger, _, mic, trailing] = Layout::horizontal([
                    Length(CONTROL_WIDTH),
                    Fill(1),
                    Length(CONTROL_WIDTH),
                    Length(CONTROL_WIDTH),
                ])
                .spacing(gap)
                .areas(controls);
                ComposerAreas {
                    badges,
                    text: body,
                    trigger,
                    mic,
                    trailing,
                }
            }
        }
    }
}
