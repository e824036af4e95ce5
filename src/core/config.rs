//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.promptbar/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::action::{self, Action};
use crate::core::color::HexColor;
use crate::core::icon::IconKey;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PromptbarConfig {
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub actions: Vec<ActionEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ComposerConfig {
    pub placeholder: Option<String>,
    pub max_width: Option<u16>,
    pub line_height: Option<u16>,
    pub single_line_height: Option<u16>,
    pub padding: Option<u16>,
    pub max_height: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub surface: Option<String>,
    pub primary: Option<String>,
    pub muted: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ActionEntry {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub hint: Option<String>,
    pub color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLACEHOLDER: &str = "Type a prompt...";
pub const DEFAULT_MAX_WIDTH: u16 = 90;
pub const DEFAULT_LINE_HEIGHT: u16 = 1;
pub const DEFAULT_SINGLE_LINE_HEIGHT: u16 = 1;
pub const DEFAULT_PADDING: u16 = 1;
pub const DEFAULT_MAX_HEIGHT: u16 = 8;

pub const DEFAULT_SURFACE: HexColor = HexColor::rgb(0x18, 0x18, 0x1b);
pub const DEFAULT_PRIMARY: HexColor = HexColor::rgb(0xfa, 0xfa, 0xfa);
pub const DEFAULT_MUTED: HexColor = HexColor::rgb(0x71, 0x71, 0x7a);

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Row metrics for the auto-sizing text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBoxSizing {
    pub line_height: u16,
    pub single_line_height: u16,
    /// Extra rows added once the text spans more than one line
    pub padding: u16,
    pub max_height: u16,
}

impl Default for TextBoxSizing {
    fn default() -> Self {
        Self {
            line_height: DEFAULT_LINE_HEIGHT,
            single_line_height: DEFAULT_SINGLE_LINE_HEIGHT,
            padding: DEFAULT_PADDING,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub surface: HexColor,
    pub primary: HexColor,
    pub muted: HexColor,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: DEFAULT_SURFACE,
            primary: DEFAULT_PRIMARY,
            muted: DEFAULT_MUTED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub placeholder: String,
    pub max_width: u16,
    pub sizing: TextBoxSizing,
    pub theme: Theme,
    pub actions: Vec<Action>,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub placeholder: Option<String>,
    pub max_width: Option<u16>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.promptbar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".promptbar").join("config.toml"))
}

/// Load config from `~/.promptbar/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PromptbarConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<PromptbarConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PromptbarConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PromptbarConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<PromptbarConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PromptbarConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# promptbar configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [composer]
# placeholder = "Type a prompt..."   # Or set PROMPTBAR_PLACEHOLDER
# max_width = 90                     # Columns; the composer is centred
# line_height = 1                    # Rows per wrapped line
# single_line_height = 1
# padding = 1                        # Extra rows once text wraps
# max_height = 8                     # Or set PROMPTBAR_MAX_HEIGHT; scrolls beyond

# [theme]
# surface = "#18181b"
# primary = "#fafafa"
# muted = "#71717a"

# Replaces the built-in actions when present.
# [[actions]]
# id = "summarize"
# label = "Summarize"
# icon = "file-text"
# hint = "Condense text into key points"
# color = "#3b82f6"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PromptbarConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with(
    config: &PromptbarConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Placeholder: CLI → env → config → default
    let placeholder = cli
        .placeholder
        .clone()
        .or_else(|| env("PROMPTBAR_PLACEHOLDER"))
        .or_else(|| config.composer.placeholder.clone())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    let max_width = cli
        .max_width
        .or(config.composer.max_width)
        .unwrap_or(DEFAULT_MAX_WIDTH);

    // Max height: env → config → default
    let max_height = env("PROMPTBAR_MAX_HEIGHT")
        .and_then(|raw| match raw.parse::<u16>() {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Ignoring PROMPTBAR_MAX_HEIGHT={raw:?}: {e}");
                None
            }
        })
        .or(config.composer.max_height)
        .unwrap_or(DEFAULT_MAX_HEIGHT);

    let line_height = config
        .composer
        .line_height
        .unwrap_or(DEFAULT_LINE_HEIGHT)
        .max(1);
    let single_line_height = config
        .composer
        .single_line_height
        .unwrap_or(DEFAULT_SINGLE_LINE_HEIGHT)
        .max(1);

    let sizing = TextBoxSizing {
        line_height,
        single_line_height,
        padding: config.composer.padding.unwrap_or(DEFAULT_PADDING),
        max_height: max_height.max(single_line_height),
    };

    let theme = Theme {
        surface: resolve_color("theme.surface", config.theme.surface.as_deref())
            .unwrap_or(DEFAULT_SURFACE),
        primary: resolve_color("theme.primary", config.theme.primary.as_deref())
            .unwrap_or(DEFAULT_PRIMARY),
        muted: resolve_color("theme.muted", config.theme.muted.as_deref())
            .unwrap_or(DEFAULT_MUTED),
    };

    ResolvedConfig {
        placeholder,
        max_width,
        sizing,
        theme,
        actions: resolve_actions(&config.actions),
    }
}

/// Configured actions replace the built-ins; none configured means built-ins.
fn resolve_actions(entries: &[ActionEntry]) -> Vec<Action> {
    if entries.is_empty() {
        return action::default_actions();
    }

    let actions = entries
        .iter()
        .map(|entry| Action {
            id: entry.id.clone(),
            label: entry.label.clone(),
            icon: IconKey::from(entry.icon.as_str()),
            hint: entry.hint.clone(),
            color: resolve_color(&format!("actions.{}.color", entry.id), entry.color.as_deref()),
        })
        .collect();

    action::dedupe(actions)
}

fn resolve_color(field: &str, raw: Option<&str>) -> Option<HexColor> {
    let raw = raw?;
    match raw.parse() {
        Ok(color) => Some(color),
        Err(e) => {
            warn!("Ignoring {field}: {e}");
            None
        }
    }
}
