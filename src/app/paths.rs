// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these that is set wins:
//!
//! 1. a directory passed to the `*_with_override` functions (tests, embedding)
//! 2. the `--config-dir` flag, recorded once by [`init_cli_overrides`]
//! 3. the `SNAP_TOAST_CONFIG_DIR` environment variable, ignored when empty
//! 4. `SnapToast/` under the platform config directory (`dirs`)

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "SnapToast";

pub const ENV_CONFIG_DIR: &str = "SNAP_TOAST_CONFIG_DIR";

/// Serializes tests that touch the process environment.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which rule picked the config directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    Override,
    Cli,
    Env,
    Platform,
}

/// Records the `--config-dir` flag. The first call wins.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::debug!("config dir override already initialized, ignoring");
    }
}

/// Resolves the config directory and reports which rule chose it.
///
/// `None` only when no rule applies and the platform has no config directory.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<(PathBuf, ConfigDirSource)> {
    explicit
        .map(|path| (path, ConfigDirSource::Override))
        .or_else(|| {
            CLI_CONFIG_DIR
                .get()
                .cloned()
                .flatten()
                .map(|path| (path, ConfigDirSource::Cli))
        })
        .or_else(|| {
            std::env::var_os(ENV_CONFIG_DIR)
                .filter(|value| !value.is_empty())
                .map(|value| (PathBuf::from(value), ConfigDirSource::Env))
        })
        .or_else(|| {
            dirs::config_dir().map(|base| (base.join(APP_NAME), ConfigDirSource::Platform))
        })
}

pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let (path, source) = resolve_config_dir(override_path)?;
    log::trace!("config dir {} (from {source:?})", path.display());
    Some(path)
}
