// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications::{self, Mode, Position};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Drives toast deadlines while any group is alive
    MessageChanged(String),
    TitleChanged(String),
    DurationChanged(String),
    ModeSelected(Mode),
    PositionSelected(Position),
    /// Enqueue one toast from the form.
    Show,
    /// Enqueue a toast whose message is long enough to be expandable.
    ShowLong,
    /// Enqueue several toasts at once to exercise the pending queue.
    Flood,
    ClearAll,
    MaxVisibleChanged(usize),
    /// Write the current settings to `settings.toml`.
    SaveSettings,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SNAP_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional per-zone ceiling, applied over the loaded settings.
    pub max_visible: Option<usize>,
}
