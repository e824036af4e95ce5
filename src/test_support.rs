//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::action::default_actions;
use crate::core::config::{DEFAULT_MAX_WIDTH, DEFAULT_PLACEHOLDER, ResolvedConfig, TextBoxSizing, Theme};
use crate::tui::component::EventHandler;
use crate::tui::components::Composer;
use crate::tui::event::TuiEvent;

/// Built-in defaults, without reading a config file or the environment.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        placeholder: DEFAULT_PLACEHOLDER.to_string(),
        max_width: DEFAULT_MAX_WIDTH,
        sizing: TextBoxSizing::default(),
        theme: Theme::default(),
        actions: default_actions(),
    }
}

/// Feed `text` to the composer one character at a time.
pub fn type_text(composer: &mut Composer, text: &str) {
    for c in text.chars() {
        composer.handle_event(&TuiEvent::InputChar(c));
    }
}

/// Draw once into a `width` x `height` test terminal and return the screen,
/// one line per row.
pub fn render_to_string(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .chunks(width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
