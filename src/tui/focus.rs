//! Keyboard focus.
//!
//! There is no DOM to ask "which element has focus", so the host owns a
//! [`Focus`] value and passes it to components that care, the same way it
//! passes any other prop.

/// Stable name for a focusable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(&'static str);

impl ElementId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// An element has focus. `editable` is true for text inputs, where
    /// printable keys are expected to insert text.
    Element { id: ElementId, editable: bool },
    /// Nothing in particular (the page itself).
    Page,
}

impl Focus {
    pub fn is_on(self, target: ElementId) -> bool {
        matches!(self, Focus::Element { id, .. } if id == target)
    }

    pub fn is_editable(self) -> bool {
        matches!(self, Focus::Element { editable: true, .. })
    }
}
