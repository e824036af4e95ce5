//! # Icon Registry
//!
//! The finite set of icons the widget knows how to draw.
//!
//! Icons referenced from code use [`IconName`] directly, so a typo is a
//! compile error. Icons that arrive from the config file are free-form
//! strings and stay as [`IconKey::Custom`] until render time, where an
//! unknown key degrades to "draw nothing" instead of failing.

use std::fmt;
use std::str::FromStr;

/// Every icon in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Plus,
    Microphone,
    Recording,
    ArrowNarrowUp,
    X,
    Image,
    FileText,
    Lightbulb,
    Code,
    Translate,
    HelpCircle,
    Edit,
    Stars,
    BarChart,
    PenTool,
}

impl IconName {
    pub const ALL: [IconName; 15] = [
        IconName::Plus,
        IconName::Microphone,
        IconName::Recording,
        IconName::ArrowNarrowUp,
        IconName::X,
        IconName::Image,
        IconName::FileText,
        IconName::Lightbulb,
        IconName::Code,
        IconName::Translate,
        IconName::HelpCircle,
        IconName::Edit,
        IconName::Stars,
        IconName::BarChart,
        IconName::PenTool,
    ];

    /// Canonical registry key, as written in config files.
    pub fn key(self) -> &'static str {
        match self {
            IconName::Plus => "plus",
            IconName::Microphone => "microphone",
            IconName::Recording => "recording",
            IconName::ArrowNarrowUp => "arrow-narrow-up",
            IconName::X => "x",
            IconName::Image => "image",
            IconName::FileText => "file-text",
            IconName::Lightbulb => "lightbulb",
            IconName::Code => "code",
            IconName::Translate => "translate",
            IconName::HelpCircle => "help-circle",
            IconName::Edit => "edit",
            IconName::Stars => "stars",
            IconName::BarChart => "bar-chart",
            IconName::PenTool => "pen-tool",
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a key is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon \"{0}\"")]
pub struct UnknownIcon(pub String);

impl FromStr for IconName {
    type Err = UnknownIcon;

    /// Accepts the canonical kebab-case key as well as PascalCase
    /// (`"ArrowNarrowUp"`) and any casing in between.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        IconName::ALL
            .into_iter()
            .find(|icon| icon.key().replace('-', "") == normalized)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// How an icon is referenced: statically, or by a key from external data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconKey {
    Builtin(IconName),
    Custom(String),
}

impl IconKey {
    /// Resolve to a registry entry. `None` for unknown custom keys.
    pub fn resolve(&self) -> Option<IconName> {
        match self {
            IconKey::Builtin(name) => Some(*name),
            IconKey::Custom(key) => key.parse().ok(),
        }
    }
}

impl From<IconName> for IconKey {
    fn from(name: IconName) -> Self {
        IconKey::Builtin(name)
    }
}

impl From<&str> for IconKey {
    fn from(key: &str) -> Self {
        match key.parse() {
            Ok(name) => IconKey::Builtin(name),
            Err(_) => IconKey::Custom(key.to_string()),
        }
    }
}

impl fmt::Display for IconKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconKey::Builtin(name) => fmt::Display::fmt(name, f),
            IconKey::Custom(key) => f.write_str(key),
        }
    }
}
