//! # Badge Component
//!
//! A one-row chip showing an icon and a label in the badge's accent colour,
//! with an optional `×` remove control.
//!
//! ```text
//! ▐ ≡ Summarize × ▌
//! ```
//!
//! The body is the accent tinted at 12.5% over the surface, the caps at 25%.
//! `Badge` is transient: built each frame from a `BadgeItem`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::core::badge::BadgeItem;
use crate::core::color::{BACKGROUND_ALPHA, BORDER_ALPHA, HexColor};
use crate::core::icon::IconName;
use crate::tui::component::Component;
use crate::tui::components::icon::IconView;

const BADGE_ICON_SIZE: u16 = 14;
const REMOVE_ICON_SIZE: u16 = 12;
/// Columns between badges in a strip
pub const BADGE_GAP: u16 = 1;

/// Which part of a badge a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeHit {
    Remove,
    Body,
}

pub struct Badge<'a> {
    pub item: &'a BadgeItem,
    /// Colour the tints are blended over
    pub surface: HexColor,
    /// Whether to show the remove control
    pub removable: bool,
}

impl<'a> Badge<'a> {
    pub fn new(item: &'a BadgeItem, surface: HexColor, removable: bool) -> Self {
        Self {
            item,
            surface,
            removable,
        }
    }

    fn icon(&self) -> IconView {
        IconView::new(self.item.icon.clone()).size(BADGE_ICON_SIZE)
    }

    /// Column of the remove glyph relative to the badge's left edge.
    fn remove_offset(&self) -> u16 {
        // cap + space + icon + label + space
        2 + self.icon().cell_width() + self.item.label.width() as u16 + 1
    }

    /// Total columns the badge occupies.
    pub fn width(&self) -> u16 {
        let remove = if self.removable { 2 } else { 0 };
        2 + self.icon().cell_width() + self.item.label.width() as u16 + remove + 2
    }

    pub fn line(&self) -> Line<'static> {
        let accent = self.item.color;
        let body = Style::default()
            .fg(accent.into())
            .bg(accent.tint(BACKGROUND_ALPHA, self.surface).into());
        let cap = Style::default().fg(accent.tint(BORDER_ALPHA, self.surface).into());

        let mut spans = vec![Span::styled("▐", cap), Span::styled(" ", body)];
        match self.icon().style(body).span() {
            Some(icon) => spans.push(icon),
            // Keep the width stable when the icon is unknown
            None => spans.push(Span::styled(
                " ".repeat(self.icon().cell_width() as usize),
                body,
            )),
        }
        spans.push(Span::styled(self.item.label.clone(), body));
        if self.removable {
            spans.push(Span::styled(" ", body));
            if let Some(x) = IconView::new(IconName::X)
                .size(REMOVE_ICON_SIZE)
                .style(body)
                .span()
            {
                spans.push(x);
            }
        }
        spans.push(Span::styled(" ", body));
        spans.push(Span::styled("▌", cap));
        Line::from(spans)
    }

    /// Hit test a click at screen (`col`, `row`) against a badge drawn in `area`.
    pub fn hit(&self, col: u16, row: u16, area: Rect) -> Option<BadgeHit> {
        if row != area.y || col < area.x || col >= area.x + self.width().min(area.width) {
            return None;
        }
        if self.removable && col == area.x + self.remove_offset() {
            Some(BadgeHit::Remove)
        } else {
            Some(BadgeHit::Body)
        }
    }
}

impl Component for Badge<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

/// Place badges of the given widths left to right, wrapping onto new rows
/// when `max_width` is exceeded. Returns each badge's area relative to
/// `origin`.
pub fn flow_layout(widths: &[u16], origin: Rect) -> Vec<Rect> {
    let mut areas = Vec::with_capacity(widths.len());
    let (mut x, mut y) = (0u16, 0u16);
    for &w in widths {
        let w = w.min(origin.width);
        if x > 0 && x + w > origin.width {
            x = 0;
            y += 1;
        }
        areas.push(Rect::new(origin.x + x, origin.y + y, w, 1));
        x += w + BADGE_GAP;
    }
    areas
}

/// Rows needed to flow badges of `widths` into `max_width` columns.
pub fn flow_height(widths: &[u16], max_width: u16) -> u16 {
    flow_layout(widths, Rect::new(0, 0, max_width, 0))
        .last()
        .map_or(0, |last| last.y + 1)
}
