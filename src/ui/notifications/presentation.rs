// SPDX-License-Identifier: MPL-2.0
//! Pure mapping from notification state to what the toast widget draws.
//!
//! Keeping this separate from [`super::toast`] means state transitions never
//! touch styling, and the rendering rules can be checked without a renderer.

use super::notification::{Notification, Phase};
use crate::config::Settings;
use crate::ui::design_tokens::sizing;

/// Height rule for a toast body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeightLimit {
    /// Clipped to a fixed height.
    Clipped(f32),
    /// Grows to fit the whole message.
    FitContent,
}

/// The expand/collapse control of a long message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandToggle<'a> {
    pub label: &'a str,
    /// Whether the full message is currently shown.
    pub expanded: bool,
}

/// Everything the toast widget needs to know about a notification's state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastPresentation<'a> {
    pub height: HeightLimit,
    /// Present only for messages long enough to be expandable.
    pub toggle: Option<ExpandToggle<'a>>,
    /// Pinned toasts get a paused accent.
    pub paused: bool,
    /// Fully shown (not entering and not on its way out).
    pub shown: bool,
}

/// Computes the presentation of `notification` under `settings`.
#[must_use]
pub fn present<'a>(notification: &Notification, settings: &'a Settings) -> ToastPresentation<'a> {
    let toggle = notification.is_expandable().then(|| {
        let expanded = notification.is_expanded();
        ExpandToggle {
            label: if expanded {
                settings.read_less_text()
            } else {
                settings.read_more_text()
            },
            expanded,
        }
    });

    let height = match toggle {
        Some(ExpandToggle { expanded: true, .. }) => HeightLimit::FitContent,
        _ => HeightLimit::Clipped(sizing::TOAST_COLLAPSED_HEIGHT),
    };

    ToastPresentation {
        height,
        toggle,
        paused: notification.is_pinned(),
        shown: matches!(notification.phase(), Phase::Shown | Phase::Closing { .. }),
    }
}
