//! # ActionMenu Component
//!
//! The "/" menu: a popover anchored to the composer's `+` button that lists
//! actions and lets the user pick one with the keyboard or the mouse.
//!
//! ## State Machine
//!
//! ```text
//!                 open() / "/" / click +
//!     ┌────────┐ ───────────────────────► ┌──────────────────┐
//!     │ Closed │                          │ Open { selected }│ ◄─┐ Up / Down
//!     └────────┘ ◄─────────────────────── └──────────────────┘ ──┘ (wraps)
//!        Esc, Enter, click item, click outside, click +, focus lost
//! ```
//!
//! The selection index lives inside `MenuState::Open`, so there is no index
//! to get out of range while the menu is closed. Opening always starts at 0.
//!
//! ## Subscriptions
//!
//! The host routes keys to the menu according to [`ActionMenu::subscriptions`]:
//! the "/" shortcut for as long as the menu is mounted, and navigation keys
//! (arrows, Enter, Esc) only while it is open. Closing drops the navigation
//! subscription and unmounting drops both, so nothing lingers across opens.
//!
//! ## Focus
//!
//! Opening does not move focus into the panel. The text box keeps focus and
//! the arrow keys steer the menu through the subscription instead.

pub mod popover;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::action::Action;
use crate::core::config::Theme;
use crate::core::icon::IconName;
use crate::tui::component::Component;
use crate::tui::components::icon::IconView;
use crate::tui::event::TuiEvent;
use crate::tui::focus::{ElementId, Focus};

use popover::{Interaction, Popover};

/// Rows shown before the list scrolls
pub const MAX_VISIBLE_ITEMS: usize = 6;
const ITEM_ICON_SIZE: u16 = 20;
const TRIGGER_ICON_SIZE: u16 = 20;
/// Borders (2) + horizontal padding (2)
const PANEL_OVERHEAD: u16 = 4;
const MIN_PANEL_WIDTH: u16 = 24;
const MAX_PANEL_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        selected: usize,
    },
}

/// Which keys the menu currently wants routed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subscriptions {
    /// "/" opens the menu
    pub shortcut: bool,
    /// Up, Down, Enter, Esc and focus loss steer the open menu
    pub navigation: bool,
}

impl Subscriptions {
    pub fn wants(&self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar('/') => self.shortcut,
            TuiEvent::CursorUp
            | TuiEvent::CursorDown
            | TuiEvent::Submit
            | TuiEvent::Escape
            | TuiEvent::FocusLost => self.navigation,
            _ => false,
        }
    }
}

/// High-level events emitted by the ActionMenu.
///
/// Any `Some(_)` means the input was consumed: the host must not apply its
/// default handling (inserting "/", moving the text cursor, submitting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    Opened,
    /// Closed without choosing anything
    Dismissed,
    /// Selection moved to this index
    Highlighted(usize),
    /// The action with this id was chosen; the menu is now closed
    Selected(String),
    /// Consumed without changing state
    Absorbed,
}

type OpenObserver = Box<dyn FnMut(bool)>;

/// Popover list of actions anchored to a trigger.
///
/// # Props
///
/// - `actions`: the list to show, in display order
/// - `text_input`: the text box the "/" shortcut is scoped to, if any
/// - `on_open_change`: called with the new open state after every transition
/// - anchor: set each frame with [`set_anchor`](Self::set_anchor)
///
/// # State
///
/// - `state`: `Closed` or `Open { selected }`
/// - `scroll_offset`: first visible row while the list is longer than the panel
pub struct ActionMenu {
    actions: Vec<Action>,
    state: MenuState,
    text_input: Option<ElementId>,
    on_open_change: Option<OpenObserver>,
    mounted: bool,
    theme: Theme,
    scroll_offset: usize,
    visible_rows: usize,
    popover: Popover,
    list_state: ListState,
    /// Inner list area at the last render, for mapping clicks to rows
    list_area: Option<Rect>,
}

impl ActionMenu {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions,
            state: MenuState::Closed,
            text_input: None,
            on_open_change: None,
            mounted: false,
            theme: Theme::default(),
            scroll_offset: 0,
            visible_rows: MAX_VISIBLE_ITEMS,
            popover: Popover::default(),
            list_state: ListState::default(),
            list_area: None,
        }
    }

    /// Scope the "/" shortcut to this text input.
    pub fn scope_to(mut self, text_input: ElementId) -> Self {
        self.text_input = Some(text_input);
        self
    }

    pub fn on_open_change(mut self, observer: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(observer));
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    // -- lifecycle ------------------------------------------------------------

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Drop every subscription. An open menu is closed first.
    pub fn unmount(&mut self) {
        self.close();
        self.mounted = false;
    }

    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions {
            shortcut: self.mounted,
            navigation: self.mounted && self.is_open(),
        }
    }

    // -- props / queries ------------------------------------------------------

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Replace the action list. An open menu keeps its selection if it is
    /// still in range and otherwise goes back to the first entry.
    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.actions = actions;
        if let MenuState::Open { selected } = self.state
            && selected >= self.actions.len()
        {
            self.state = MenuState::Open { selected: 0 };
            self.scroll_offset = 0;
        }
    }

    pub fn set_anchor(&mut self, anchor: Rect) {
        self.popover.anchor = anchor;
    }

    pub fn anchor(&self) -> Rect {
        self.popover.anchor
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, MenuState::Open { .. })
    }

    pub fn selected(&self) -> Option<usize> {
        match self.state {
            MenuState::Open { selected } if selected < self.actions.len() => Some(selected),
            _ => None,
        }
    }

    pub fn selected_action(&self) -> Option<&Action> {
        self.selected().map(|i| &self.actions[i])
    }

    /// Selection semantics for row `index` (the `aria-selected` of a listbox).
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected() == Some(index)
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Whether (`col`, `row`) is on the trigger or the open panel.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.popover.classify(col, row) != Interaction::Outside
    }

    // -- transitions ----------------------------------------------------------

    /// Open the menu with the first action selected. Returns `false` if it
    /// was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.scroll_offset = 0;
        self.transition(MenuState::Open { selected: 0 });
        true
    }

    /// Close without selecting. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.transition(MenuState::Closed);
        true
    }

    fn transition(&mut self, next: MenuState) {
        let was_open = self.is_open();
        self.state = next;
        let now_open = self.is_open();
        if was_open == now_open {
            return;
        }
        debug!("Action menu {}", if now_open { "opened" } else { "closed" });
        if !now_open {
            self.popover.hide();
            self.list_area = None;
        }
        if let Some(observer) = self.on_open_change.as_mut() {
            observer(now_open);
        }
    }

    fn dismiss(&mut self) -> MenuEvent {
        self.close();
        MenuEvent::Dismissed
    }

    fn choose(&mut self, index: usize) -> MenuEvent {
        match self.actions.get(index).map(|a| a.id.clone()) {
            Some(id) => {
                debug!("Action menu selected \"{id}\"");
                self.close();
                MenuEvent::Selected(id)
            }
            None => self.dismiss(),
        }
    }

    fn move_selection(&mut self, delta: isize) -> MenuEvent {
        let MenuState::Open { selected } = self.state else {
            return MenuEvent::Absorbed;
        };
        let count = self.actions.len();
        if count == 0 {
            return MenuEvent::Absorbed;
        }
        let next = (selected as isize + delta).rem_euclid(count as isize) as usize;
        self.state = MenuState::Open { selected: next };
        self.scroll_offset = scroll_into_view(next, self.scroll_offset, self.visible_rows);
        MenuEvent::Highlighted(next)
    }

    // -- input ----------------------------------------------------------------

    /// Handle a key routed through [`subscriptions`](Self::subscriptions).
    /// `focus` is where keyboard focus was when the key arrived.
    pub fn handle_key(&mut self, event: &TuiEvent, focus: Focus) -> Option<MenuEvent> {
        let subscriptions = self.subscriptions();
        if !subscriptions.wants(event) {
            return None;
        }
        match event {
            TuiEvent::InputChar('/') => {
                let in_scoped_input = self.text_input.is_some_and(|id| focus.is_on(id));
                if in_scoped_input || !focus.is_editable() {
                    Some(if self.open() {
                        MenuEvent::Opened
                    } else {
                        MenuEvent::Absorbed
                    })
                } else {
                    None
                }
            }
            TuiEvent::CursorDown => Some(self.move_selection(1)),
            TuiEvent::CursorUp => Some(self.move_selection(-1)),
            TuiEvent::Submit => {
                let selected = self.selected();
                Some(match selected {
                    Some(index) => self.choose(index),
                    None => self.dismiss(),
                })
            }
            TuiEvent::Escape | TuiEvent::FocusLost => Some(self.dismiss()),
            _ => None,
        }
    }

    /// Handle a left click at screen (`col`, `row`).
    ///
    /// Clicking the trigger toggles the menu; clicking a row chooses that
    /// action whatever the current selection; clicking anywhere else while
    /// open dismisses. An outside click still returns `Some(Dismissed)`, so
    /// callers that also want to act on it should check
    /// [`contains`](Self::contains) first.
    pub fn handle_click(&mut self, col: u16, row: u16) -> Option<MenuEvent> {
        match self.popover.classify(col, row) {
            Interaction::Trigger => Some(if self.open() {
                MenuEvent::Opened
            } else {
                self.dismiss()
            }),
            Interaction::Panel => {
                let index = self
                    .list_area
                    .filter(|area| row >= area.y && row < area.bottom())
                    .map(|area| self.scroll_offset + (row - area.y) as usize)
                    .filter(|&i| i < self.actions.len());
                Some(match index {
                    Some(i) => self.choose(i),
                    None => MenuEvent::Absorbed,
                })
            }
            Interaction::Outside if self.is_open() => Some(self.dismiss()),
            Interaction::Outside => None,
        }
    }

    // -- rendering ------------------------------------------------------------

    fn panel_size(&self) -> Size {
        let content = self
            .actions
            .iter()
            .map(|a| {
                let hint = a.hint.as_deref().map_or(0, |h| h.width() + 2);
                IconView::new(a.icon.clone()).size(ITEM_ICON_SIZE).cell_width() as usize
                    + 1
                    + a.label.width()
                    + hint
            })
            .max()
            .unwrap_or(0) as u16;
        let width = (content + PANEL_OVERHEAD).clamp(MIN_PANEL_WIDTH, MAX_PANEL_WIDTH);
        let rows = self.actions.len().clamp(1, MAX_VISIBLE_ITEMS) as u16;
        Size::new(width, rows + 2)
    }

    fn render_trigger(&self, frame: &mut Frame, area: Rect) {
        let style = if self.is_open() {
            Style::default().fg(self.theme.primary.into())
        } else {
            Style::default().fg(self.theme.muted.into())
        };
        IconView::new(IconName::Plus)
            .size(TRIGGER_ICON_SIZE)
            .style(style)
            .render(frame, area);
    }

    fn render_panel(&mut self, frame: &mut Frame, bounds: Rect) {
        let Some(selected) = self.selected().or(self.is_open().then_some(0)) else {
            return;
        };
        let Some((panel, _side)) = self.popover.place(self.panel_size(), bounds) else {
            self.list_area = None;
            return;
        };
        frame.render_widget(Clear, panel);

        let muted = Style::default().fg(self.theme.muted.into());
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(muted)
            .title(" Actions ")
            .title_bottom(Line::from(" ↑↓ Move  Enter Select  Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(panel);
        self.list_area = Some(inner);
        self.visible_rows = (inner.height as usize).max(1);
        self.scroll_offset = scroll_into_view(selected, self.scroll_offset, self.visible_rows);

        if self.actions.is_empty() {
            let empty = Paragraph::new("No actions").style(muted).block(block);
            frame.render_widget(empty, panel);
            return;
        }

        let items: Vec<ListItem> = self
            .actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let accent = action.color.unwrap_or(self.theme.primary);
                let row_style = if self.is_selected(i) {
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                let icon = IconView::new(action.icon.clone()).size(ITEM_ICON_SIZE);
                let mut spans = Vec::new();
                match icon.clone().style(row_style.fg(accent.into())).span() {
                    Some(span) => spans.push(span),
                    None => spans.push(Span::styled(
                        " ".repeat(icon.cell_width() as usize),
                        row_style,
                    )),
                }
                spans.push(Span::styled(" ", row_style));
                spans.push(Span::styled(action.label.clone(), row_style));
                if let Some(hint) = &action.hint {
                    spans.push(Span::styled("  ", row_style));
                    spans.push(Span::styled(
                        hint.clone(),
                        row_style.patch(muted).add_modifier(Modifier::DIM),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        self.list_state.select(Some(selected));
        *self.list_state.offset_mut() = self.scroll_offset;
        frame.render_stateful_widget(List::new(items).block(block), panel, &mut self.list_state);
    }
}

impl Component for ActionMenu {
    /// Draw the trigger into `area` and, while open, the panel anchored to it.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.set_anchor(area);
        self.render_trigger(frame, area);
        if self.is_open() {
            let bounds = frame.area();
            self.render_panel(frame, bounds);
        }
    }
}

/// Smallest change to `offset` that keeps `selected` inside a window of
/// `visible` rows (scroll to the nearest edge).
pub fn scroll_into_view(selected: usize, offset: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::default_actions;
    use crate::core::icon::IconName;
    use pretty_assertions::assert_eq;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TEXT: ElementId = ElementId::new("text");
    const OTHER_INPUT: ElementId = ElementId::new("other-input");
    const BUTTON: ElementId = ElementId::new("button");

    fn in_text() -> Focus {
        Focus::Element { id: TEXT, editable: true }
    }

    fn actions(n: usize) -> Vec<Action> {
        (0..n)
            .map(|i| Action::new(format!("a{i}"), format!("Action {i}"), IconName::Code))
            .collect()
    }

    fn mounted(n: usize) -> ActionMenu {
        let mut menu = ActionMenu::new(actions(n)).scope_to(TEXT);
        menu.mount();
        menu
    }

    fn press(menu: &mut ActionMenu, event: TuiEvent) -> Option<MenuEvent> {
        menu.handle_key(&event, in_text())
    }

    fn draw(menu: &mut ActionMenu, anchor: Rect) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| menu.render(f, anchor)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_starts_closed_and_unsubscribed() {
        let menu = ActionMenu::new(actions(3));
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.subscriptions(), Subscriptions::default());
    }

    #[test]
    fn test_open_resets_selection() {
        let mut menu = mounted(4);
        menu.open();
        press(&mut menu, TuiEvent::CursorDown);
        press(&mut menu, TuiEvent::CursorDown);
        assert_eq!(menu.selected(), Some(2));
        press(&mut menu, TuiEvent::Escape);
        menu.open();
        assert_eq!(menu.selected(), Some(0));
        assert_eq!(menu.scroll_offset(), 0);
    }

    #[test]
    fn test_down_wraps_after_n_presses() {
        for n in 1..=12 {
            let mut menu = mounted(n);
            menu.open();
            for _ in 0..n {
                assert!(matches!(
                    press(&mut menu, TuiEvent::CursorDown),
                    Some(MenuEvent::Highlighted(_))
                ));
            }
            assert_eq!(menu.selected(), Some(0), "n = {n}");
        }
    }

    #[test]
    fn test_up_from_zero_goes_to_last() {
        let mut menu = mounted(5);
        menu.open();
        assert_eq!(press(&mut menu, TuiEvent::CursorUp), Some(MenuEvent::Highlighted(4)));
        assert_eq!(menu.selected(), Some(4));
    }

    #[test]
    fn test_enter_selects_current_and_closes() {
        let mut menu = mounted(5);
        menu.open();
        press(&mut menu, TuiEvent::CursorDown);
        press(&mut menu, TuiEvent::CursorDown);
        assert_eq!(
            press(&mut menu, TuiEvent::Submit),
            Some(MenuEvent::Selected("a2".to_string()))
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn test_escape_closes_without_selection() {
        let mut menu = mounted(5);
        menu.open();
        press(&mut menu, TuiEvent::CursorDown);
        assert_eq!(press(&mut menu, TuiEvent::Escape), Some(MenuEvent::Dismissed));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_focus_lost_dismisses() {
        let mut menu = mounted(2);
        menu.open();
        assert_eq!(press(&mut menu, TuiEvent::FocusLost), Some(MenuEvent::Dismissed));
    }

    #[test]
    fn test_navigation_keys_ignored_while_closed() {
        let mut menu = mounted(3);
        for event in [
            TuiEvent::CursorDown,
            TuiEvent::CursorUp,
            TuiEvent::Submit,
            TuiEvent::Escape,
        ] {
            assert_eq!(press(&mut menu, event), None);
        }
        assert!(!menu.is_open());
    }

    #[test]
    fn test_slash_in_scoped_input_opens() {
        let mut menu = mounted(3);
        assert_eq!(press(&mut menu, TuiEvent::InputChar('/')), Some(MenuEvent::Opened));
        assert!(menu.is_open());
    }

    #[test]
    fn test_slash_while_open_is_idempotent() {
        let mut menu = mounted(3);
        menu.open();
        press(&mut menu, TuiEvent::CursorDown);
        assert_eq!(press(&mut menu, TuiEvent::InputChar('/')), Some(MenuEvent::Absorbed));
        assert_eq!(menu.selected(), Some(1));
    }

    #[test]
    fn test_slash_in_other_editable_types_normally() {
        let mut menu = mounted(3);
        let focus = Focus::Element {
            id: OTHER_INPUT,
            editable: true,
        };
        assert_eq!(menu.handle_key(&TuiEvent::InputChar('/'), focus), None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_slash_outside_editables_opens() {
        let mut menu = mounted(3);
        assert_eq!(
            menu.handle_key(&TuiEvent::InputChar('/'), Focus::Page),
            Some(MenuEvent::Opened)
        );
        menu.close();
        let focus = Focus::Element {
            id: BUTTON,
            editable: false,
        };
        assert_eq!(
            menu.handle_key(&TuiEvent::InputChar('/'), focus),
            Some(MenuEvent::Opened)
        );
    }

    #[test]
    fn test_unscoped_menu_ignores_slash_in_text() {
        let mut menu = ActionMenu::new(actions(3));
        menu.mount();
        assert_eq!(menu.handle_key(&TuiEvent::InputChar('/'), in_text()), None);
        assert_eq!(
            menu.handle_key(&TuiEvent::InputChar('/'), Focus::Page),
            Some(MenuEvent::Opened)
        );
    }

    #[test]
    fn test_unmounted_menu_ignores_shortcut() {
        let mut menu = ActionMenu::new(actions(3)).scope_to(TEXT);
        assert_eq!(press(&mut menu, TuiEvent::InputChar('/')), None);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_subscriptions_follow_open_state() {
        let mut menu = mounted(3);
        let shortcut_only = Subscriptions {
            shortcut: true,
            navigation: false,
        };
        assert_eq!(menu.subscriptions(), shortcut_only);
        for _ in 0..25 {
            press(&mut menu, TuiEvent::InputChar('/'));
            assert!(menu.subscriptions().navigation);
            press(&mut menu, TuiEvent::Escape);
            assert_eq!(menu.subscriptions(), shortcut_only);
        }
        menu.open();
        menu.unmount();
        assert!(!menu.is_open());
        assert_eq!(menu.subscriptions(), Subscriptions::default());
    }

    #[test]
    fn test_subscriptions_wants() {
        let nav = Subscriptions {
            shortcut: true,
            navigation: true,
        };
        assert!(nav.wants(&TuiEvent::InputChar('/')));
        assert!(nav.wants(&TuiEvent::CursorUp));
        assert!(!nav.wants(&TuiEvent::InputChar('a')));
        assert!(!nav.wants(&TuiEvent::Backspace));
        let idle = Subscriptions {
            shortcut: true,
            navigation: false,
        };
        assert!(!idle.wants(&TuiEvent::Submit));
    }

    #[test]
    fn test_observer_sees_every_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut menu = ActionMenu::new(actions(3))
            .scope_to(TEXT)
            .on_open_change(move |open| sink.borrow_mut().push(open));
        menu.mount();

        press(&mut menu, TuiEvent::InputChar('/'));
        press(&mut menu, TuiEvent::InputChar('/')); // no transition
        press(&mut menu, TuiEvent::Submit);
        menu.open();
        press(&mut menu, TuiEvent::Escape);
        menu.close(); // already closed

        assert_eq!(*seen.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn test_empty_list() {
        let mut menu = mounted(0);
        assert_eq!(press(&mut menu, TuiEvent::InputChar('/')), Some(MenuEvent::Opened));
        assert_eq!(press(&mut menu, TuiEvent::CursorDown), Some(MenuEvent::Absorbed));
        assert_eq!(menu.selected(), None);
        assert_eq!(press(&mut menu, TuiEvent::Submit), Some(MenuEvent::Dismissed));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_set_actions_clamps_selection() {
        let mut menu = mounted(5);
        menu.open();
        press(&mut menu, TuiEvent::CursorUp);
        assert_eq!(menu.selected(), Some(4));
        menu.set_actions(actions(2));
        assert_eq!(menu.selected(), Some(0));
    }

    #[test]
    fn test_scroll_into_view() {
        assert_eq!(scroll_into_view(0, 0, 6), 0);
        assert_eq!(scroll_into_view(6, 0, 6), 1);
        assert_eq!(scroll_into_view(9, 0, 6), 4);
        assert_eq!(scroll_into_view(2, 4, 6), 2);
        assert_eq!(scroll_into_view(5, 3, 6), 3);
    }

    #[test]
    fn test_navigation_keeps_selection_visible() {
        let mut menu = mounted(10);
        menu.open();
        for _ in 0..7 {
            press(&mut menu, TuiEvent::CursorDown);
        }
        assert_eq!(menu.selected(), Some(7));
        assert_eq!(menu.scroll_offset(), 2);
        // Wrap back to the top
        for _ in 0..3 {
            press(&mut menu, TuiEvent::CursorDown);
        }
        assert_eq!(menu.selected(), Some(0));
        assert_eq!(menu.scroll_offset(), 0);
        // And up to the bottom
        press(&mut menu, TuiEvent::CursorUp);
        assert_eq!(menu.scroll_offset(), 4);
    }

    #[test]
    fn test_render_closed_draws_only_trigger() {
        let mut menu = mounted(3);
        let screen = draw(&mut menu, Rect::new(2, 18, 2, 1));
        assert!(screen.contains('+'));
        assert!(!screen.contains("Actions"));
    }

    #[test]
    fn test_render_open_panel_above_trigger() {
        let mut menu = ActionMenu::new(default_actions()).scope_to(TEXT);
        menu.mount();
        menu.open();
        let screen = draw(&mut menu, Rect::new(2, 18, 2, 1));
        let lines: Vec<&str> = screen.lines().collect();
        assert!(screen.contains("Actions"));
        assert!(screen.contains("Create image"));
        assert!(screen.contains("Generate an image from a prompt"));
        // Six visible rows; "Help me write" is scrolled out of view
        assert!(!screen.contains("Help me write"));
        // Panel ends one row above the trigger
        assert!(lines[16].contains('╰'));
        assert!(!lines[17].contains('╰'));
    }

    #[test]
    fn test_click_item_selects_regardless_of_index() {
        let mut menu = ActionMenu::new(default_actions()).scope_to(TEXT);
        menu.mount();
        menu.open();
        draw(&mut menu, Rect::new(2, 18, 2, 1));
        let list = menu.list_area.unwrap();

        // Third visible row is "idea" even though selection is on row 0
        let event = menu.handle_click(list.x + 1, list.y + 2);
        assert_eq!(event, Some(MenuEvent::Selected("idea".to_string())));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_trigger_toggles() {
        let mut menu = mounted(3);
        draw(&mut menu, Rect::new(2, 18, 2, 1));
        assert_eq!(menu.handle_click(2, 18), Some(MenuEvent::Opened));
        draw(&mut menu, Rect::new(2, 18, 2, 1));
        assert_eq!(menu.handle_click(3, 18), Some(MenuEvent::Dismissed));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_click_outside_dismisses() {
        let mut menu = mounted(3);
        menu.open();
        draw(&mut menu, Rect::new(2, 18, 2, 1));
        assert!(!menu.contains(55, 19));
        assert_eq!(menu.handle_click(55, 19), Some(MenuEvent::Dismissed));
        assert!(!menu.is_open());
        // Closed: outside clicks are not the menu's business
        assert_eq!(menu.handle_click(55, 19), None);
    }

    #[test]
    fn test_click_on_panel_border_is_absorbed() {
        let mut menu = mounted(3);
        menu.open();
        draw(&mut menu, Rect::new(2, 18, 2, 1));
        let panel = menu.popover.panel.unwrap();
        assert_eq!(menu.handle_click(panel.x, panel.y), Some(MenuEvent::Absorbed));
        assert!(menu.is_open());
    }
}
