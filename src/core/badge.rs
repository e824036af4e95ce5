//! # Badges
//!
//! A badge records that an action was applied to the message being composed.
//! `BadgeList` owns them in display order and hands out ids.
//!
//! Ids are `"{action_id}-{n}"` with `n` taken from a per-list counter that
//! never goes backwards, so two badges for the same action added back to back
//! still get distinct ids.

use std::fmt;

use crate::core::action::Action;
use crate::core::color::HexColor;
use crate::core::icon::IconKey;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BadgeId(String);

impl BadgeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeItem {
    pub id: BadgeId,
    pub icon: IconKey,
    pub label: String,
    pub color: HexColor,
}

#[derive(Debug, Default, Clone)]
pub struct BadgeList {
    items: Vec<BadgeItem>,
    next_seq: u64,
}

impl BadgeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a badge for `action`. Actions without their own colour use
    /// `fallback_color`.
    pub fn push(&mut self, action: &Action, fallback_color: HexColor) -> BadgeId {
        let id = BadgeId(format!("{}-{}", action.id, self.next_seq));
        self.next_seq += 1;
        self.items.push(BadgeItem {
            id: id.clone(),
            icon: action.icon.clone(),
            label: action.label.clone(),
            color: action.color.unwrap_or(fallback_color),
        });
        id
    }

    /// Remove the badge with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &BadgeId) -> bool {
        let before = self.items.len();
        self.items.retain(|b| &b.id != id);
        self.items.len() != before
    }

    /// Remove every badge, returning them in display order.
    pub fn take(&mut self) -> Vec<BadgeItem> {
        std::mem::take(&mut self.items)
    }

    pub fn items(&self) -> &[BadgeItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::default_actions;
    use crate::core::icon::IconName;
    use std::collections::HashSet;

    const GRAY: HexColor = HexColor::rgb(0x80, 0x80, 0x80);

    fn labels(list: &BadgeList) -> Vec<&str> {
        list.items().iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn test_push_appends_one_badge() {
        let actions = default_actions();
        let mut list = BadgeList::new();
        let id = list.push(&actions[0], GRAY);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, id);
        assert_eq!(list.items()[0].label, "Create image");
        assert_eq!(Some(list.items()[0].color), actions[0].color);
    }

    #[test]
    fn test_same_action_twice_gets_distinct_ids() {
        let actions = default_actions();
        let mut list = BadgeList::new();
        let ids: HashSet<BadgeId> = (0..50).map(|_| list.push(&actions[3], GRAY)).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let actions = default_actions();
        let mut list = BadgeList::new();
        let first = list.push(&actions[1], GRAY);
        list.remove(&first);
        let second = list.push(&actions[1], GRAY);
        assert_ne!(first, second);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let actions = default_actions();
        let mut list = BadgeList::new();
        list.push(&actions[0], GRAY);
        let middle = list.push(&actions[1], GRAY);
        list.push(&actions[2], GRAY);

        assert!(list.remove(&middle));
        assert_eq!(labels(&list), vec!["Create image", "Get ideas"]);
        assert!(!list.remove(&middle), "second removal is a no-op");
    }

    #[test]
    fn test_fallback_color() {
        let plain = Action::new("plain", "Plain", IconName::Code);
        let mut list = BadgeList::new();
        list.push(&plain, GRAY);
        assert_eq!(list.items()[0].color, GRAY);
    }

    #[test]
    fn test_take_empties_list() {
        let actions = default_actions();
        let mut list = BadgeList::new();
        list.push(&actions[0], GRAY);
        list.push(&actions[1], GRAY);
        let taken = list.take();
        assert_eq!(taken.len(), 2);
        assert!(list.is_empty());
    }
}
