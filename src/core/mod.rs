//! # Core Widget Data
//!
//! This module contains promptbar's plain data and rules.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Action (menu items)  │
//!                    │  • BadgeList (chips)    │
//!                    │  • icons, colours       │
//!                    │  • config               │
//!                    │                         │
//!                    │  No rendering. No keys. │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`action`]: `Action` definitions and the built-in list
//! - [`badge`]: `BadgeList`, the composer's attached badges
//! - [`icon`]: the icon registry
//! - [`color`]: hex colours and alpha tinting
//! - [`config`]: config file loading and resolution

pub mod action;
pub mod badge;
pub mod color;
pub mod config;
pub mod icon;
