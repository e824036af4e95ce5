//! # TUI Components
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built per frame from borrowed data and thrown away:
//! - `IconView`: a registry glyph at a nominal size
//! - `Badge`: one removable action chip
//!
//! ### Stateful Components (Event-Driven)
//!
//! Own local state across frames and emit events:
//! - `ActionMenu`: the "/" popover and its keyboard state machine
//! - `Composer`: the text box that hosts the menu and the badges
//!
//! ## Composition
//!
//! `Composer` renders `Badge`s and `IconView`s and owns one `ActionMenu`.
//! The menu never touches the composer's state; it reports a
//! `MenuEvent::Selected(id)` and the composer decides what that means.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── icon.rs          (Glyph renderer)
//! ├── badge.rs         (Action chip + flow layout)
//! ├── action_menu/     (Menu state machine + popover placement)
//! └── composer/        (Text box, auto-resize, layout modes)
//! ```

use ratatui::style::Color;

use crate::core::color::HexColor;

pub mod action_menu;
pub mod badge;
pub mod composer;
pub mod icon;

pub use action_menu::{ActionMenu, MenuEvent, MenuState, Subscriptions};
pub use badge::{Badge, BadgeHit};
pub use composer::{Composer, ComposerEvent, ComposerSettings, Submission, TrailingControl};
pub use icon::IconView;

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}
