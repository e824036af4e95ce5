//! # Actions
//!
//! An `Action` is a command the user can pick from the "/" menu: "Summarize",
//! "Translate", and so on. Picking one attaches a badge to the composer.
//!
//! ```text
//! Action list ──► ActionMenu ──► MenuEvent::Selected(id) ──► Composer
//!                                                            └─► BadgeList::push
//! ```
//!
//! Actions are plain data. The menu reports *which* action was chosen and the
//! owner of the state decides what choosing it means.

use std::collections::HashSet;

use log::warn;

use crate::core::color::HexColor;
use crate::core::icon::{IconKey, IconName};

#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Unique within its list
    pub id: String,
    pub label: String,
    pub icon: IconKey,
    pub hint: Option<String>,
    pub color: Option<HexColor>,
}

impl Action {
    pub fn new(id: impl Into<String>, label: impl Into<String>, icon: impl Into<IconKey>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            hint: None,
            color: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_color(mut self, color: HexColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Look up an action by id.
pub fn find<'a>(actions: &'a [Action], id: &str) -> Option<&'a Action> {
    actions.iter().find(|a| a.id == id)
}

/// Drop actions whose id was already seen, keeping the first occurrence.
pub fn dedupe(actions: Vec<Action>) -> Vec<Action> {
    let mut seen = HashSet::new();
    actions
        .into_iter()
        .filter(|action| {
            let fresh = seen.insert(action.id.clone());
            if !fresh {
                warn!("Ignoring duplicate action id \"{}\"", action.id);
            }
            fresh
        })
        .collect()
}

/// The built-in example actions. Hosts are expected to replace these
/// (see `[[actions]]` in the config file).
pub fn default_actions() -> Vec<Action> {
    vec![
        Action::new("image", "Create image", IconName::Image)
            .with_hint("Generate an image from a prompt")
            .with_color(HexColor::rgb(0xf5, 0x9e, 0x0b)),
        Action::new("summarize", "Summarize", IconName::FileText)
            .with_hint("Condense text into key points")
            .with_color(HexColor::rgb(0x3b, 0x82, 0xf6)),
        Action::new("idea", "Get ideas", IconName::Lightbulb)
            .with_hint("Spark ideas on any topic")
            .with_color(HexColor::rgb(0xea, 0xb3, 0x08)),
        Action::new("code", "Write code", IconName::Code)
            .with_hint("Generate or refactor code")
            .with_color(HexColor::rgb(0x10, 0xb9, 0x81)),
        Action::new("translate", "Translate", IconName::Translate)
            .with_hint("Convert text to another language")
            .with_color(HexColor::rgb(0x06, 0xb6, 0xd4)),
        Action::new("explain", "Explain", IconName::HelpCircle)
            .with_hint("Break down a concept simply")
            .with_color(HexColor::rgb(0x8b, 0x5c, 0xf6)),
        Action::new("rewrite", "Rewrite", IconName::Edit)
            .with_hint("Improve tone and clarity")
            .with_color(HexColor::rgb(0xec, 0x48, 0x99)),
        Action::new("brainstorm", "Brainstorm", IconName::Stars)
            .with_hint("Explore options together")
            .with_color(HexColor::rgb(0xf9, 0x73, 0x16)),
        Action::new("analyze", "Analyze", IconName::BarChart)
            .with_hint("Dig into data or arguments")
            .with_color(HexColor::rgb(0x63, 0x66, 0xf1)),
        Action::new("write", "Help me write", IconName::PenTool)
            .with_hint("Draft an email, post, or essay")
            .with_color(HexColor::rgb(0x14, 0xb8, 0xa6)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_actions_are_complete() {
        let actions = default_actions();
        let ids: Vec<&str> = actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "image", "summarize", "idea", "code", "translate", "explain", "rewrite",
                "brainstorm", "analyze", "write"
            ]
        );
        for action in &actions {
            assert!(action.hint.is_some(), "{} has no hint", action.id);
            assert!(action.color.is_some(), "{} has no colour", action.id);
            assert!(action.icon.resolve().is_some(), "{} has no icon", action.id);
        }
    }

    #[test]
    fn test_find() {
        let actions = default_actions();
        assert_eq!(find(&actions, "code").map(|a| a.label.as_str()), Some("Write code"));
        assert!(find(&actions, "missing").is_none());
    }

    #[test]
    fn test_dedupe_keeps_first() {
        let actions = vec![
            Action::new("a", "First", IconName::Code),
            Action::new("b", "Other", IconName::Code),
            Action::new("a", "Second", IconName::Code),
        ];
        let deduped = dedupe(actions);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].label, "First");
        assert_eq!(deduped[1].id, "b");
    }
}
