// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! notification preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Visible-toast ceiling, default duration and the
//!   labels of the expand toggle
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SNAP_TOAST_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Runtime Settings
//!
//! The file format uses optional fields so partial files stay valid. At runtime
//! the resolved values live in [`Settings`], which is only ever changed through
//! [`Settings::configure`] with a [`SettingsPatch`]: fields left as `None` in
//! the patch keep their current value.
//!
//! # Examples
//!
//! ```no_run
//! use snap_toast::config::{self, Settings, SettingsPatch};
//!
//! let (config, _warning) = config::load();
//! let mut settings = Settings::from_config(&config);
//!
//! settings.configure(SettingsPatch::default().max_visible_toasts(5));
//! assert_eq!(settings.max_visible_toasts(), 5);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast notification settings as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Maximum number of toasts visible at once in one position group.
    #[serde(
        default = "default_max_visible_toasts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_visible_toasts: Option<usize>,

    /// Auto-dismiss duration used when a toast does not set its own.
    #[serde(
        default = "default_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,

    /// Label of the expand toggle on long messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_more_text: Option<String>,

    /// Label of the collapse toggle on expanded messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_less_text: Option<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            max_visible_toasts: default_max_visible_toasts(),
            default_duration_ms: default_duration_ms(),
            read_more_text: None,
            read_less_text: None,
        }
    }
}

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

fn default_max_visible_toasts() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE_TOASTS)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

// =============================================================================
// Runtime Settings
// =============================================================================

/// Resolved process-wide notification settings.
///
/// Read by every queue operation. Changing them never touches toasts that
/// were already created, except that the toggle labels are read at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    max_visible_toasts: usize,
    default_duration: Duration,
    read_more_text: String,
    read_less_text: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_visible_toasts: DEFAULT_MAX_VISIBLE_TOASTS,
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            read_more_text: DEFAULT_READ_MORE_TEXT.to_string(),
            read_less_text: DEFAULT_READ_LESS_TEXT.to_string(),
        }
    }
}

impl Settings {
    /// Resolves runtime settings from a loaded configuration file.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut settings = Self::default();
        settings.configure(SettingsPatch::from(&config.notifications));
        settings
    }

    /// Merges `patch` into the current settings.
    ///
    /// Only fields set in the patch are overwritten. A ceiling of zero is
    /// raised to [`MIN_MAX_VISIBLE_TOASTS`].
    pub fn configure(&mut self, patch: SettingsPatch) {
        if let Some(max) = patch.max_visible_toasts {
            if max < MIN_MAX_VISIBLE_TOASTS {
                log::warn!(
                    "max_visible_toasts = {max} is below the minimum, using {MIN_MAX_VISIBLE_TOASTS}"
                );
            }
            self.max_visible_toasts = max.max(MIN_MAX_VISIBLE_TOASTS);
        }
        if let Some(duration) = patch.default_duration {
            self.default_duration = duration;
        }
        if let Some(text) = patch.read_more_text {
            self.read_more_text = text;
        }
        if let Some(text) = patch.read_less_text {
            self.read_less_text = text;
        }
    }

    /// Maximum number of simultaneously visible toasts per position group.
    #[must_use]
    pub fn max_visible_toasts(&self) -> usize {
        self.max_visible_toasts
    }

    /// Duration applied to toasts that do not set their own.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    #[must_use]
    pub fn read_more_text(&self) -> &str {
        &self.read_more_text
    }

    #[must_use]
    pub fn read_less_text(&self) -> &str {
        &self.read_less_text
    }

    /// Converts the runtime settings back into the on-disk section.
    #[must_use]
    pub fn to_config(&self) -> Config {
        Config {
            notifications: NotificationConfig {
                max_visible_toasts: Some(self.max_visible_toasts),
                default_duration_ms: Some(
                    u64::try_from(self.default_duration.as_millis()).unwrap_or(u64::MAX),
                ),
                read_more_text: Some(self.read_more_text.clone()),
                read_less_text: Some(self.read_less_text.clone()),
            },
        }
    }
}

/// Partial settings update passed to [`Settings::configure`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub max_visible_toasts: Option<usize>,
    pub default_duration: Option<Duration>,
    pub read_more_text: Option<String>,
    pub read_less_text: Option<String>,
}

impl SettingsPatch {
    #[must_use]
    pub fn max_visible_toasts(mut self, max: usize) -> Self {
        self.max_visible_toasts = Some(max);
        self
    }

    #[must_use]
    pub fn default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn read_more_text(mut self, text: impl Into<String>) -> Self {
        self.read_more_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn read_less_text(mut self, text: impl Into<String>) -> Self {
        self.read_less_text = Some(text.into());
        self
    }
}

impl From<&NotificationConfig> for SettingsPatch {
    fn from(section: &NotificationConfig) -> Self {
        Self {
            max_visible_toasts: section.max_visible_toasts,
            default_duration: section.default_duration_ms.map(Duration::from_millis),
            read_more_text: section.read_more_text.clone(),
            read_less_text: section.read_less_text.clone(),
        }
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
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
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
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
