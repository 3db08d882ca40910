// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[navigation]` - Underline lookahead and highlight source
//! - `[animation]` - Spring tuning, typing speed, smooth-scroll duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! Out-of-range numbers are clamped when read through the accessor methods,
//! so a hand-edited file can never produce an unusable animation.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::nav::{HighlightSource, IndicatorSettings, SpringConfig, REFERENCE_LINE};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Navigation underline settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Distance below the scroll offset treated as the reading position.
    #[serde(default = "default_lookahead", skip_serializing_if = "Option::is_none")]
    pub lookahead_px: Option<f32>,

    /// Which computation decides the highlighted label.
    #[serde(default)]
    pub highlight: HighlightSource,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            lookahead_px: default_lookahead(),
            highlight: HighlightSource::default(),
        }
    }
}

impl NavigationConfig {
    /// Lookahead clamped to its valid range.
    #[must_use]
    pub fn lookahead(&self) -> f32 {
        let value = self.lookahead_px.unwrap_or(DEFAULT_LOOKAHEAD_PX);
        if value.is_finite() {
            value.clamp(MIN_LOOKAHEAD_PX, MAX_LOOKAHEAD_PX)
        } else {
            DEFAULT_LOOKAHEAD_PX
        }
    }
}

/// Animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(
        default = "default_spring_stiffness",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_stiffness: Option<f32>,

    #[serde(
        default = "default_spring_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub spring_damping: Option<f32>,

    /// Delay between two typed characters of the hero title.
    #[serde(
        default = "default_typing_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub typing_interval_ms: Option<u64>,

    /// Duration of a smooth scroll to a section.
    #[serde(
        default = "default_scroll_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_duration_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spring_stiffness: default_spring_stiffness(),
            spring_damping: default_spring_damping(),
            typing_interval_ms: default_typing_interval_ms(),
            scroll_duration_ms: default_scroll_duration_ms(),
        }
    }
}

fn clamp_finite(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, max),
        _ => default,
    }
}

impl AnimationConfig {
    /// Spring parameters clamped to a stable range.
    #[must_use]
    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(
            clamp_finite(
                self.spring_stiffness,
                DEFAULT_SPRING_STIFFNESS,
                MIN_SPRING_STIFFNESS,
                MAX_SPRING_STIFFNESS,
            ),
            clamp_finite(
                self.spring_damping,
                DEFAULT_SPRING_DAMPING,
                MIN_SPRING_DAMPING,
                MAX_SPRING_DAMPING,
            ),
        )
    }

    #[must_use]
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(
            self.typing_interval_ms
                .unwrap_or(DEFAULT_TYPING_INTERVAL_MS)
                .clamp(MIN_TYPING_INTERVAL_MS, MAX_TYPING_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(
            self.scroll_duration_ms
                .unwrap_or(DEFAULT_SCROLL_DURATION_MS)
                .clamp(MIN_SCROLL_DURATION_MS, MAX_SCROLL_DURATION_MS),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Config {
    /// Indicator tunables derived from the navigation and animation sections.
    #[must_use]
    pub fn indicator_settings(&self) -> IndicatorSettings {
        IndicatorSettings {
            lookahead: self.navigation.lookahead(),
            reference_line: REFERENCE_LINE,
            highlight: self.navigation.highlight,
            spring: self.animation.spring(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

fn default_lookahead() -> Option<f32> {
    Some(DEFAULT_LOOKAHEAD_PX)
}

fn default_spring_stiffness() -> Option<f32> {
    Some(DEFAULT_SPRING_STIFFNESS)
}

fn default_spring_damping() -> Option<f32> {
    Some(DEFAULT_SPRING_DAMPING)
}

fn default_typing_interval_ms() -> Option<u64> {
    Some(DEFAULT_TYPING_INTERVAL_MS)
}

fn default_scroll_duration_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DURATION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "configuration unreadable, using defaults"
                    );
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
