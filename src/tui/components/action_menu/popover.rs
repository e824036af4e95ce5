//! Anchored overlay placement and outside-click classification.
//!
//! The panel prefers the side above its anchor, left edges aligned, one row
//! of offset. When there is not enough room above it flips below; when
//! neither side fits it takes the roomier side and shrinks. It is shifted
//! left if it would run past the right edge of the bounds.

use ratatui::layout::{Position, Rect, Size};

/// Rows between the anchor and the panel
pub const SIDE_OFFSET: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

/// Where a click landed relative to an open popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Trigger,
    Panel,
    Outside,
}

#[derive(Debug, Default, Clone)]
pub struct Popover {
    /// Area of the control the popover is anchored to
    pub anchor: Rect,
    /// Area of the panel at the last placement; `None` while closed
    pub panel: Option<Rect>,
}

impl Popover {
    /// Compute and remember the panel area for content of `size` within `bounds`.
    /// Returns `None` and keeps no panel when neither side has a free row.
    pub fn place(&mut self, size: Size, bounds: Rect) -> Option<(Rect, Side)> {
        let (panel, side) = place(self.anchor, size, bounds);
        if panel.is_empty() {
            self.panel = None;
            return None;
        }
        self.panel = Some(panel);
        Some((panel, side))
    }

    pub fn hide(&mut self) {
        self.panel = None;
    }

    pub fn classify(&self, col: u16, row: u16) -> Interaction {
        let pos = Position::new(col, row);
        if self.anchor.contains(pos) {
            Interaction::Trigger
        } else if self.panel.is_some_and(|p| p.contains(pos)) {
            Interaction::Panel
        } else {
            Interaction::Outside
        }
    }
}

/// Place a panel of `size` next to `anchor`, inside `bounds`.
pub fn place(anchor: Rect, size: Size, bounds: Rect) -> (Rect, Side) {
    let width = size.width.min(bounds.width);
    let space_above = anchor.y.saturating_sub(bounds.y).saturating_sub(SIDE_OFFSET);
    let space_below = bounds
        .bottom()
        .saturating_sub(anchor.bottom())
        .saturating_sub(SIDE_OFFSET);

    let (side, height) = if space_above >= size.height {
        (Side::Top, size.height)
    } else if space_below >= size.height {
        (Side::Bottom, size.height)
    } else if space_above >= space_below {
        (Side::Top, space_above)
    } else {
        (Side::Bottom, space_below)
    };

    let y = match side {
        Side::Top => anchor.y.saturating_sub(SIDE_OFFSET + height),
        Side::Bottom => anchor.bottom() + SIDE_OFFSET,
    };

    let x = anchor
        .x
        .min(bounds.right().saturating_sub(width))
        .max(bounds.x);

    (Rect::new(x, y, width, height), side)
}
