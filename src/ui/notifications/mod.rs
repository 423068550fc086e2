// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are grouped by screen zone. Each zone shows at most the
//! configured number of toasts and queues the rest in arrival order; a queued
//! toast is promoted as soon as a slot frees up. Every shown toast runs its
//! own auto-dismiss countdown, which hovering pauses and a click pins.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its `Mode`, `Position` and `Phase`
//! - [`timer`] - pausable countdown with generation-tagged expiry handles
//! - [`manager`] - per-zone queues and the lifecycle driven by `tick`
//! - [`presentation`] - what a toast looks like given its state
//! - [`toast`] - iced widgets rendering the toasts
//!
//! # Usage
//!
//! ```ignore
//! use snap_toast::ui::notifications::{Manager, Notification, Position};
//!
//! let mut manager = Manager::new();
//! manager.enqueue(Notification::success("Saved").with_position(Position::BottomLeft));
//!
//! // On every timer tick
//! manager.tick(std::time::Instant::now());
//!
//! // In your view function
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! The `_at` methods take an explicit `Instant`, which is what the tests use;
//! `enqueue`, `dismiss` and `handle_message` read the clock themselves.

pub mod manager;
pub mod notification;
pub mod presentation;
pub mod timer;
pub mod toast;

pub use manager::{ContainerId, DismissReason, Event, Manager, Message as NotificationMessage};
pub use notification::{Mode, Notification, NotificationId, Phase, Position};
pub use presentation::{present, ExpandToggle, HeightLimit, ToastPresentation};
pub use timer::{Countdown, Scheduled, TimerState};
pub use toast::Toast;
