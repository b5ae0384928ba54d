// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the rating defaults from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[rating]` - Initial rating and its bounds
//! - `[appearance]` - Icon size, spacing and tint colors
//!
//! Colors are written as hex strings (`#RRGGBB` or `#RRGGBBAA`).
//!
//! # Examples
//!
//! ```no_run
//! use iced_rating::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.rating.maximum = Some(10);
//! config::save(&config).expect("Failed to save config");
//!
//! let state = config.rating_state();
//! assert_eq!(state.maximum_rating(), 10);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use crate::rating::{Appearance, RatingState};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the settings file is unreadable.
pub const LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Initial rating and bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<u32>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial: Some(DEFAULT_RATING),
            minimum: Some(DEFAULT_MINIMUM_RATING),
            maximum: Some(DEFAULT_MAXIMUM_RATING),
        }
    }
}

/// Icon geometry and colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppearanceConfig {
    /// Gap between icons in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f32>,

    /// Icon edge length in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_tint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unselected_tint: Option<String>,
}

/// Settings file contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub rating: RatingConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Builds a rating model from the `[rating]` section.
    ///
    /// Missing values fall back to defaults; inconsistent ones are clamped.
    #[must_use]
    pub fn rating_state(&self) -> RatingState {
        RatingState::with_bounds(
            self.rating.initial.unwrap_or(DEFAULT_RATING),
            self.rating.minimum.unwrap_or(DEFAULT_MINIMUM_RATING),
            self.rating.maximum.unwrap_or(DEFAULT_MAXIMUM_RATING),
        )
    }

    /// Builds an appearance from the `[appearance]` section.
    ///
    /// Unparseable colors are logged and replaced by the defaults.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        let mut appearance = Appearance::new();
        let section = &self.appearance;

        if let Some(spacing) = section.spacing {
            appearance.set_spacing(spacing);
        }
        if let Some(size) = section.icon_size {
            appearance.set_icon_size(size);
        }
        if let Some(color) = color_or_warn(section.selected_tint.as_deref(), "selected_tint") {
            appearance.set_selected_tint_color(color);
        }
        if let Some(color) = color_or_warn(section.unselected_tint.as_deref(), "unselected_tint")
        {
            appearance.set_unselected_tint_color(color);
        }

        appearance
    }
}

fn color_or_warn(raw: Option<&str>, field: &str) -> Option<Color> {
    let raw = raw?;
    match parse_hex_color(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            tracing::warn!(field, value = raw, %err, "ignoring invalid color");
            None
        }
    }
}

/// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
pub fn parse_hex_color(raw: &str) -> Result<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Config(format!("invalid color: {raw}")));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| Error::Config(format!("invalid color: {raw}")))
    };

    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if hex.len() == 8 { channel(6)? } else { u8::MAX };

    Ok(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

/// Formats a color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
#[must_use]
pub fn format_hex_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == u8::MAX {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with [`LOAD_WARNING`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".to_string())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}
