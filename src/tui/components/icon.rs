//! # Icon Component
//!
//! Draws a registry icon as a terminal glyph.
//!
//! Sizes are given in the same nominal units a design file would use (24 is
//! a normal icon) and converted to columns at [`CELL_PX`] per column. The
//! glyph is left-aligned and padded out to that width so rows of icons line
//! up. A stroke width of 2 or more draws bold.
//!
//! Unknown keys are not an error: a warning is logged and nothing is drawn.

use log::warn;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::icon::{IconKey, IconName};
use crate::tui::component::Component;

/// Nominal size units per terminal column
pub const CELL_PX: u16 = 12;
pub const DEFAULT_SIZE: u16 = 24;
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;
/// Stroke widths at or above this render bold
const BOLD_STROKE_WIDTH: f32 = 2.0;

/// Terminal glyph for each registry icon.
pub fn glyph(name: IconName) -> &'static str {
    match name {
        IconName::Plus => "+",
        IconName::Microphone => "♪",
        IconName::Recording => "◉",
        IconName::ArrowNarrowUp => "↑",
        IconName::X => "×",
        IconName::Image => "▣",
        IconName::FileText => "≡",
        IconName::Lightbulb => "☼",
        IconName::Code => "λ",
        IconName::Translate => "⇄",
        IconName::HelpCircle => "?",
        IconName::Edit => "✎",
        IconName::Stars => "✧",
        IconName::BarChart => "▥",
        IconName::PenTool => "✒",
    }
}

/// An icon plus its rendering attributes.
#[derive(Debug, Clone)]
pub struct IconView {
    key: IconKey,
    size: u16,
    stroke_width: f32,
    style: Style,
}

impl IconView {
    pub fn new(key: impl Into<IconKey>) -> Self {
        Self {
            key: key.into(),
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            style: Style::default(),
        }
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Pass-through style, applied as given.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Columns reserved for this icon.
    pub fn cell_width(&self) -> u16 {
        self.size.div_ceil(CELL_PX).max(1)
    }

    /// The icon as a span, or `None` (with a warning) if the key is unknown.
    pub fn span(&self) -> Option<Span<'static>> {
        let Some(name) = self.key.resolve() else {
            warn!("Icon \"{}\" not found in registry", self.key);
            return None;
        };
        let glyph = glyph(name);
        let pad = (self.cell_width() as usize).saturating_sub(glyph.width());
        let mut style = self.style;
        if self.stroke_width >= BOLD_STROKE_WIDTH {
            style = style.add_modifier(Modifier::BOLD);
        }
        Some(Span::styled(format!("{glyph}{}", " ".repeat(pad)), style))
    }
}

impl Component for IconView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(span) = self.span() {
            frame.render_widget(span, area);
        }
    }
}
