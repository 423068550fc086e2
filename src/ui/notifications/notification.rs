// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with the `Mode`
//! and `Position` enums used throughout the notification system.

use super::timer::{Countdown, TimerState};
use crate::config::READ_MORE_THRESHOLD_CHARS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Visual mode of a toast. Only affects styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mode {
    #[default]
    Info,
    Warning,
    Danger,
    Success,
    /// Unrecognized mode name. Rendered without an accent.
    Plain,
}

impl Mode {
    /// Modes selectable from the demo window.
    pub const ALL: [Mode; 4] = [Mode::Info, Mode::Warning, Mode::Danger, Mode::Success];

    /// Parses a mode name. Unknown names are accepted and map to [`Mode::Plain`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "info" => Mode::Info,
            "warning" => Mode::Warning,
            "danger" => Mode::Danger,
            "success" => Mode::Success,
            other => {
                log::debug!("unrecognized toast mode {other:?}, rendering unstyled");
                Mode::Plain
            }
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mode::Info => "info",
            Mode::Warning => "warning",
            Mode::Danger => "danger",
            Mode::Success => "success",
            Mode::Plain => "plain",
        }
    }

    /// Returns the accent color for this mode, `None` when unstyled.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Mode::Info => Some(palette::INFO),
            Mode::Warning => Some(palette::WARNING),
            Mode::Danger => Some(palette::DANGER),
            Mode::Success => Some(palette::SUCCESS),
            Mode::Plain => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Screen zone a toast is anchored to. Each zone is an independent group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    CenterTop,
    CenterBottom,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
        Position::CenterTop,
        Position::CenterBottom,
    ];

    /// Parses a position name such as `"bottom-left"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|position| position.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::CenterTop => "center-top",
            Position::CenterBottom => "center-bottom",
        }
    }

    /// Bottom zones stack newest-first so the newest toast sits at the edge.
    #[must_use]
    pub fn is_bottom(self) -> bool {
        matches!(
            self,
            Position::BottomRight | Position::BottomLeft | Position::CenterBottom
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a notification is in its display lifecycle.
///
/// Every phase carries at most one deadline, and the countdown only holds a
/// deadline while the phase is [`Phase::Shown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting in its group's pending list.
    Queued,
    /// On screen, countdown starts at `show_at`.
    Entering { show_at: Instant },
    /// On screen with an active countdown (running or paused).
    Shown,
    /// Closed by the user; stays shown until `hide_at`.
    Closing { hide_at: Instant },
    /// Exit transition; removed from its group at `remove_at`.
    Hiding { remove_at: Instant },
}

/// A toast notification.
///
/// Built with [`Notification::new`] and the builder methods, then handed to
/// the manager which owns it until removal.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    title: Option<String>,
    mode: Mode,
    position: Position,
    /// Requested duration; `None` uses the configured default at enqueue time.
    duration: Option<Duration>,
    pub(super) countdown: Countdown,
    pub(super) phase: Phase,
    /// Sticky pause set by a primary click or the expand toggle.
    pub(super) pinned: bool,
    pub(super) hovered: bool,
    pub(super) expanded: bool,
}

impl Notification {
    /// Creates an info notification anchored top-right.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            title: None,
            mode: Mode::default(),
            position: Position::default(),
            duration: None,
            countdown: Countdown::new(Duration::ZERO),
            phase: Phase::Queued,
            pinned: false,
            hovered: false,
            expanded: false,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).with_mode(Mode::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_mode(Mode::Warning)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(message).with_mode(Mode::Danger)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_mode(Mode::Success)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Sets the auto-dismiss duration, overriding the configured default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Gives the notification its countdown. Called once when it is enqueued.
    pub(super) fn arm(&mut self, default_duration: Duration) {
        self.countdown = Countdown::new(self.duration.unwrap_or(default_duration));
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Total countdown length once enqueued.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.countdown.total()
    }

    /// Countdown time left as of `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.countdown.remaining_at(now)
    }

    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.countdown.state()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the message is long enough to get an expand toggle.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.message.chars().count() > READ_MORE_THRESHOLD_CHARS
    }

    /// Whether the toast is on its way out (closing or hiding).
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. } | Phase::Hiding { .. })
    }
}
