//! # Composer Component
//!
//! The chat-style prompt box: an auto-sizing text box, a strip of action
//! badges above it, and controls around it.
//!
//! ```text
//! ╭──────────────────────────────────────────────────────────╮
//! │ ▐ λ Write code × ▌ ▐ ⇄ Translate × ▌                      │
//! │ +   Refactor this function to...            ♪   ↑        │
//! ╰──────────────────────────────────────────────────────────╯
//! ```
//!
//! ## Responsibilities
//!
//! - Edit text (insert, paste, delete, cursor and word movement)
//! - Resize the text box to its content and switch layout mode
//! - Own the badge list: add on menu selection, remove on `×`
//! - Host the action menu, anchored to the `+` control
//! - Offer Send when there is something to send, Record otherwise
//! - Track keyboard focus between the text box and the page
//!
//! ## Event Routing
//!
//! Keys the menu is subscribed to go to the menu first. Anything it consumes
//! stops there; everything else falls through to the text box. Clicks are
//! hit-tested innermost first, so removing a badge never reaches the
//! container (which would focus the text box).

mod auto_resize;
mod cursor;
pub mod layout;
mod text_wrap;

pub use auto_resize::AutoResize;
pub use layout::{ComposerAreas, LayoutMode};

use log::{debug, info};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{
    Block, BorderType, Padding, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

use crate::core::action::{self, Action, default_actions};
use crate::core::badge::{BadgeId, BadgeItem, BadgeList};
use crate::core::config::{DEFAULT_PLACEHOLDER, ResolvedConfig, TextBoxSizing, Theme};
use crate::core::icon::IconName;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::action_menu::{ActionMenu, MenuEvent};
use crate::tui::components::badge::{Badge, BadgeHit, flow_height, flow_layout};
use crate::tui::components::icon::IconView;
use crate::tui::event::TuiEvent;
use crate::tui::focus::{ElementId, Focus};

use cursor::CursorState;
use text_wrap::{
    line_end, line_start, next_char_boundary, next_word_boundary, prev_char_boundary,
    prev_word_boundary, wrap_line_count, wrapped_lines,
};

/// Focus id of the composer's text box.
pub const TEXT_BOX: ElementId = ElementId::new("composer.text");
const CONTROL_ICON_SIZE: u16 = 20;
/// Border columns/rows around the composer
const FRAME_WIDTH: u16 = 2;
const FRAME_PADDING: u16 = 1;

/// Control at the right end of the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingControl {
    Send,
    Record,
}

impl TrailingControl {
    fn icon(self) -> IconName {
        match self {
            TrailingControl::Send => IconName::ArrowNarrowUp,
            TrailingControl::Record => IconName::Recording,
        }
    }
}

/// What the user sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub text: String,
    pub badges: Vec<BadgeItem>,
}

/// High-level events emitted by the Composer
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// Enter or the send control; the composer has been cleared
    Submit(Submission),
    /// Mic or record control clicked
    VoiceRequested,
    /// Something visible changed
    Changed,
}

#[derive(Debug, Clone)]
pub struct ComposerSettings {
    pub placeholder: String,
    pub sizing: TextBoxSizing,
    pub theme: Theme,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            sizing: TextBoxSizing::default(),
            theme: Theme::default(),
        }
    }
}

impl From<&ResolvedConfig> for ComposerSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            placeholder: config.placeholder.clone(),
            sizing: config.sizing,
            theme: config.theme,
        }
    }
}

/// Measurements for one width, shared by `height` and `render`.
struct Measure {
    mode: LayoutMode,
    text_width: u16,
    lines: u16,
    text_height: u16,
    badge_rows: u16,
}

/// Areas recorded at the last render, for hit testing.
#[derive(Default)]
struct HitAreas {
    container: Rect,
    parts: ComposerAreas,
    badges: Vec<(BadgeId, Rect)>,
}

/// Prompt composer with action menu and badges.
///
/// # Props
///
/// - `settings`: placeholder, sizing metrics and theme
/// - actions: handed to the embedded [`ActionMenu`]
///
/// # State
///
/// - `text` and `cursor`: the text box contents and caret
/// - `badges`: actions applied to this prompt, in the order they were added
/// - `focus`: the text box or the page
pub struct Composer {
    text: String,
    cursor: CursorState,
    badges: BadgeList,
    menu: ActionMenu,
    focus: Focus,
    settings: ComposerSettings,
    resize: AutoResize,
    areas: HitAreas,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(default_actions(), ComposerSettings::default())
    }
}

impl Composer {
    pub fn new(actions: Vec<Action>, settings: ComposerSettings) -> Self {
        let mut menu = ActionMenu::new(action::dedupe(actions))
            .scope_to(TEXT_BOX)
            .with_theme(settings.theme);
        menu.mount();
        Self {
            text: String::new(),
            cursor: CursorState::new(),
            badges: BadgeList::new(),
            menu,
            focus: Focus::Element {
                id: TEXT_BOX,
                editable: true,
            },
            resize: AutoResize::new(settings.sizing),
            settings,
            areas: HitAreas::default(),
        }
    }

    /// Observe the menu opening and closing.
    pub fn on_menu_open_change(mut self, observer: impl FnMut(bool) + 'static) -> Self {
        self.menu = self.menu.on_open_change(observer);
        self
    }

    /// Release the menu's key subscriptions.
    pub fn unmount(&mut self) {
        self.menu.unmount();
    }

    // -- queries --------------------------------------------------------------

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and put the cursor at its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor.pos = self.text.len();
    }

    pub fn badges(&self) -> &[BadgeItem] {
        self.badges.items()
    }

    pub fn menu(&self) -> &ActionMenu {
        &self.menu
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            debug!("Focus {:?} -> {:?}", self.focus, focus);
            self.focus = focus;
        }
    }

    fn focus_text_box(&mut self) {
        self.set_focus(Focus::Element {
            id: TEXT_BOX,
            editable: true,
        });
    }

    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || !self.badges.is_empty()
    }

    pub fn trailing_control(&self) -> TrailingControl {
        if self.has_content() {
            TrailingControl::Send
        } else {
            TrailingControl::Record
        }
    }

    pub fn layout_mode(&self, width: u16) -> LayoutMode {
        self.measure(width).mode
    }

    /// Rows of the text box at `width` total columns.
    pub fn text_box_height(&self, width: u16) -> u16 {
        self.measure(width).text_height
    }

    /// Total rows the composer needs at `width` columns, frame included.
    pub fn height(&self, width: u16) -> u16 {
        let m = self.measure(width);
        FRAME_WIDTH + m.badge_rows + m.text_height + m.mode.controls_height()
    }

    fn inner_width(width: u16) -> u16 {
        width.saturating_sub(FRAME_WIDTH + 2 * FRAME_PADDING)
    }

    fn badge_widths(&self) -> Vec<u16> {
        self.badges
            .items()
            .iter()
            .map(|item| Badge::new(item, self.settings.theme.surface, true).width())
            .collect()
    }

    fn measure(&self, width: u16) -> Measure {
        let inner = Self::inner_width(width);
        // The mode is decided at the single-line text width
        let single = LayoutMode::SingleLine.text_width(inner);
        let mode = LayoutMode::for_lines(wrap_line_count(&self.text, single));
        let text_width = mode.text_width(inner);
        let lines = wrap_line_count(&self.text, text_width);
        Measure {
            mode,
            text_width,
            lines,
            text_height: self.resize.height_for_lines(lines),
            badge_rows: flow_height(&self.badge_widths(), inner),
        }
    }

    // -- badges ---------------------------------------------------------------

    /// Attach a badge for the action with `id`. Unknown ids are ignored.
    pub fn add_badge(&mut self, id: &str) -> Option<BadgeId> {
        let action = action::find(self.menu.actions(), id)?;
        let badge_id = self.badges.push(action, self.settings.theme.primary);
        info!("Added badge {badge_id}");
        Some(badge_id)
    }

    pub fn remove_badge(&mut self, id: &BadgeId) -> bool {
        let removed = self.badges.remove(id);
        if removed {
            info!("Removed badge {id}");
        }
        removed
    }

    // -- submission -----------------------------------------------------------

    fn submit(&mut self) -> Option<ComposerEvent> {
        if !self.has_content() {
            return None;
        }
        let submission = Submission {
            text: std::mem::take(&mut self.text),
            badges: self.badges.take(),
        };
        self.cursor.reset();
        info!(
            "Submitted {} chars with {} badges",
            submission.text.len(),
            submission.badges.len()
        );
        Some(ComposerEvent::Submit(submission))
    }

    // -- input ----------------------------------------------------------------

    fn apply_menu_event(&mut self, event: MenuEvent) -> ComposerEvent {
        if let MenuEvent::Selected(id) = event {
            self.add_badge(&id);
            self.focus_text_box();
        }
        ComposerEvent::Changed
    }

    fn handle_click(&mut self, col: u16, row: u16) -> Option<ComposerEvent> {
        let on_menu = self.menu.contains(col, row);
        let menu_event = self.menu.handle_click(col, row).map(|e| self.apply_menu_event(e));
        if on_menu {
            return menu_event;
        }

        let pos = Position::new(col, row);
        let hit = self.areas.badges.iter().find_map(|(id, area)| {
            let item = self.badges.items().iter().find(|item| &item.id == id)?;
            let hit = Badge::new(item, self.settings.theme.surface, true).hit(col, row, *area)?;
            Some((id.clone(), hit))
        });
        match hit {
            Some((id, BadgeHit::Remove)) => {
                self.remove_badge(&id);
                return Some(ComposerEvent::Changed);
            }
            Some((_, BadgeHit::Body)) => {}
            None => {
                let parts = self.areas.parts;
                if parts.mic.contains(pos) {
                    return Some(ComposerEvent::VoiceRequested);
                }
                if parts.trailing.contains(pos) {
                    return match self.trailing_control() {
                        TrailingControl::Send => self.submit(),
                        TrailingControl::Record => Some(ComposerEvent::VoiceRequested),
                    };
                }
            }
        }

        let before = self.focus;
        if self.areas.container.contains(pos) {
            self.focus_text_box();
        } else {
            self.set_focus(Focus::Page);
        }
        if self.focus != before {
            Some(ComposerEvent::Changed)
        } else {
            menu_event
        }
    }

    fn insert(&mut self, s: &str) {
        self.text.insert_str(self.cursor.pos, s);
        self.cursor.pos += s.len();
    }

    fn move_cursor(&mut self, pos: usize) -> Option<ComposerEvent> {
        (self.cursor.pos != pos).then(|| {
            self.cursor.pos = pos;
            ComposerEvent::Changed
        })
    }

    fn edit(&mut self, event: &TuiEvent) -> Option<ComposerEvent> {
        let pos = self.cursor.pos;
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert(c.encode_utf8(&mut buf));
                Some(ComposerEvent::Changed)
            }
            TuiEvent::Paste(data) => {
                let normalized = data.replace("\r\n", "\n").replace('\r', "\n");
                self.insert(&normalized);
                Some(ComposerEvent::Changed)
            }
            TuiEvent::Backspace if pos > 0 => {
                let prev = prev_char_boundary(&self.text, pos);
                self.text.drain(prev..pos);
                self.cursor.pos = prev;
                Some(ComposerEvent::Changed)
            }
            TuiEvent::Delete if pos < self.text.len() => {
                let next = next_char_boundary(&self.text, pos);
                self.text.drain(pos..next);
                Some(ComposerEvent::Changed)
            }
            TuiEvent::CursorLeft if pos > 0 => self.move_cursor(prev_char_boundary(&self.text, pos)),
            TuiEvent::CursorRight if pos < self.text.len() => {
                self.move_cursor(next_char_boundary(&self.text, pos))
            }
            TuiEvent::WordLeft => self.move_cursor(prev_word_boundary(&self.text, pos)),
            TuiEvent::WordRight => self.move_cursor(next_word_boundary(&self.text, pos)),
            TuiEvent::CursorHome => self.move_cursor(line_start(&self.text, pos)),
            TuiEvent::CursorEnd => self.move_cursor(line_end(&self.text, pos)),
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(&self.text, -1, self.cursor.last_width)
                .then_some(ComposerEvent::Changed),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(&self.text, 1, self.cursor.last_width)
                .then_some(ComposerEvent::Changed),
            TuiEvent::Submit => self.submit(),
            TuiEvent::Escape => {
                self.set_focus(Focus::Page);
                Some(ComposerEvent::Changed)
            }
            _ => None,
        }
    }

    // -- rendering ------------------------------------------------------------

    fn render_text(&mut self, frame: &mut Frame, area: Rect, m: &Measure) {
        let theme = self.settings.theme;
        let line_height = self.settings.sizing.line_height.max(1);
        self.cursor.last_width = m.text_width;

        if self.text.is_empty() {
            let placeholder = Paragraph::new(self.settings.placeholder.as_str())
                .style(Style::default().fg(theme.muted.into()));
            frame.render_widget(placeholder, area);
        } else {
            let visible = self.resize.visible_lines(m.lines, area.height);
            self.cursor
                .update_scroll_offset(&self.text, m.text_width, visible);
            let mut lines = Vec::new();
            for line in wrapped_lines(&self.text, m.text_width)
                .into_iter()
                .skip(self.cursor.scroll_offset as usize)
                .take(visible as usize)
            {
                lines.push(Line::from(line));
                lines.extend((1..line_height).map(|_| Line::default()));
            }
            let text = Paragraph::new(Text::from(lines))
                .style(Style::default().fg(theme.primary.into()));
            frame.render_widget(text, area);

            if m.lines > visible {
                let mut state = ScrollbarState::default()
                    .content_length((m.lines - visible) as usize)
                    .position(self.cursor.scroll_offset as usize);
                let track = Rect {
                    x: self.areas.container.right().saturating_sub(1),
                    width: 1,
                    ..area
                };
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight)
                        .begin_symbol(None)
                        .end_symbol(None),
                    track,
                    &mut state,
                );
            }
        }

        if self.focus.is_on(TEXT_BOX) {
            let pos = self.cursor.screen_pos(&self.text, area, line_height);
            frame.set_cursor_position(pos);
        }
    }

    fn render_controls(&self, frame: &mut Frame) {
        let theme = self.settings.theme;
        let parts = self.areas.parts;
        IconView::new(IconName::Microphone)
            .size(CONTROL_ICON_SIZE)
            .style(Style::default().fg(theme.muted.into()))
            .render(frame, parts.mic);

        let control = self.trailing_control();
        let style = match control {
            TrailingControl::Send => Style::default()
                .fg(theme.surface.into())
                .bg(theme.primary.into()),
            TrailingControl::Record => Style::default().fg(theme.muted.into()),
        };
        IconView::new(control.icon())
            .size(CONTROL_ICON_SIZE)
            .stroke_width(2.0)
            .style(style)
            .render(frame, parts.trailing);
    }
}

impl Component for Composer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = self.settings.theme;
        let m = self.measure(area.width);

        let border = if self.focus.is_on(TEXT_BOX) {
            theme.muted
        } else {
            theme.muted.tint(0x80, theme.surface)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border.into()))
            .style(Style::default().bg(theme.surface.into()))
            .padding(Padding::horizontal(FRAME_PADDING));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.areas.container = area;
        self.areas.parts = m.mode.split(inner, m.badge_rows, m.text_height);

        let widths = self.badge_widths();
        let placed = flow_layout(&widths, self.areas.parts.badges);
        self.areas.badges.clear();
        for (item, badge_area) in self.badges.items().iter().zip(placed) {
            Badge::new(item, theme.surface, true).render(frame, badge_area);
            self.areas.badges.push((item.id.clone(), badge_area));
        }

        let text_area = self.areas.parts.text;
        self.render_text(frame, text_area, &m);
        self.render_controls(frame);

        // Last, so the panel draws over everything else
        let trigger = self.areas.parts.trigger;
        self.menu.render(frame, trigger);
    }
}

impl EventHandler for Composer {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.menu.subscriptions().wants(event)
            && let Some(menu_event) = self.menu.handle_key(event, self.focus)
        {
            return Some(self.apply_menu_event(menu_event));
        }

        match event {
            TuiEvent::MouseClick(col, row) => self.handle_click(*col, *row),
            TuiEvent::FocusLost | TuiEvent::Resize | TuiEvent::ForceQuit => None,
            _ if !self.focus.is_on(TEXT_BOX) => None,
            _ => self.edit(event),
        }
    }
}
