// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// How often toast deadlines are checked.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates a periodic tick subscription for notification deadlines.
///
/// Idle when no position group exists, so an empty screen costs nothing.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
