// SPDX-License-Identifier: MPL-2.0
//! `snap_toast` is a toast notification system built with the Iced GUI
//! framework.
//!
//! Notifications are queued per screen zone behind a configurable ceiling,
//! auto-dismiss after a countdown that pauses on hover, and can be pinned or
//! expanded by the user. A small demo window exercises the whole lifecycle.

#![doc(html_root_url = "https://docs.rs/snap_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
