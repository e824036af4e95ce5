//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, runs the event loop and
//! draws a page with the composer centred at the bottom.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The loop sleeps up to 500ms waiting for input, then drains every pending
//! event before drawing once. Nothing animates, so a frame is only drawn
//! when an event changed something (or the terminal was resized).
//!
//! A `SteadyBar` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

pub mod component;
pub mod components;
pub mod event;
pub mod focus;
mod ui;

use log::info;
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::config::ResolvedConfig;
use crate::tui::component::EventHandler;
use crate::tui::components::{Composer, ComposerEvent, ComposerSettings, Submission};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Redraw,
    Idle,
    Quit,
}

/// Presentation state for the page hosting the composer.
pub struct TuiState {
    pub composer: Composer,
    /// Widest the composer gets; it is centred in wider terminals
    pub max_width: u16,
    /// Most recent submission, echoed on the page
    pub last_submission: Option<Submission>,
    pub status_message: String,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        let composer = Composer::new(config.actions.clone(), ComposerSettings::from(config))
            .on_menu_open_change(|open| info!("Action menu open: {open}"));
        Self {
            composer,
            max_width: config.max_width,
            last_submission: None,
            status_message: String::new(),
        }
    }

    /// Apply one event to the page.
    pub fn apply(&mut self, event: &TuiEvent) -> LoopAction {
        match event {
            TuiEvent::ForceQuit => return LoopAction::Quit,
            TuiEvent::Resize => return LoopAction::Redraw,
            _ => {}
        }
        match self.composer.handle_event(event) {
            Some(ComposerEvent::Submit(submission)) => {
                self.status_message.clear();
                self.last_submission = Some(submission);
                LoopAction::Redraw
            }
            Some(ComposerEvent::VoiceRequested) => {
                info!("Voice input requested");
                self.status_message = "Voice input is not available here".to_string();
                LoopAction::Redraw
            }
            Some(ComposerEvent::Changed) => LoopAction::Redraw,
            None => LoopAction::Idle,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+Enter through; terminals without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange,
            Show,
            SetCursorStyle::SteadyBar,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, focus change, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableFocusChange,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut tui));
    tui.composer.unmount();
    ratatui::restore();
    info!("promptbar shutting down");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, tui: &mut TuiState) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain all pending events before the next draw
        let mut next = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = next {
            match tui.apply(&event) {
                LoopAction::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                LoopAction::Redraw => needs_redraw = true,
                LoopAction::Idle => {}
            }
            next = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_config, type_text};

    #[test]
    fn test_force_quit() {
        let mut tui = TuiState::new(&test_config());
        assert_eq!(tui.apply(&TuiEvent::ForceQuit), LoopAction::Quit);
    }

    #[test]
    fn test_submission_is_kept_for_the_page() {
        let mut tui = TuiState::new(&test_config());
        type_text(&mut tui.composer, "hello");
        assert_eq!(tui.apply(&TuiEvent::Submit), LoopAction::Redraw);
        let sent = tui.last_submission.as_ref().unwrap();
        assert_eq!(sent.text, "hello");
        assert_eq!(tui.composer.text(), "");
    }

    #[test]
    fn test_unhandled_event_is_idle() {
        let mut tui = TuiState::new(&test_config());
        assert_eq!(tui.apply(&TuiEvent::CursorLeft), LoopAction::Idle);
        assert_eq!(tui.apply(&TuiEvent::Resize), LoopAction::Redraw);
    }
}
