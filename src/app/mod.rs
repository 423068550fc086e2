// SPDX-License-Identifier: MPL-2.0
//! Application root state for the demo window.
//!
//! The `App` owns the notification [`Manager`] and a small form for firing
//! toasts. It translates messages into manager operations and keeps settings
//! persistence close to the update loop.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, SettingsPatch};
use crate::ui::notifications::{Manager, Mode, Notification, Position};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Toasts enqueued at once by the flood action.
pub const FLOOD_COUNT: usize = 5;

const LONG_MESSAGE: &str = "This message is long enough to be clipped. \
    Click the toggle below to read all of it; expanding pins the toast so it \
    stays on screen until you close it.";

/// Root Iced application state.
pub struct App {
    notifications: Manager,
    message: String,
    title: String,
    duration: String,
    mode: Mode,
    position: Position,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.mode)
            .field("position", &self.position)
            .field("has_notifications", &self.notifications.has_notifications())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            notifications: Manager::new(),
            message: "Hello from SnapToast".to_string(),
            title: String::new(),
            duration: String::new(),
            mode: Mode::default(),
            position: Position::default(),
        }
    }
}

impl App {
    /// Initializes application state from the settings file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = App {
            notifications: Manager::with_settings(config::Settings::from_config(&config)),
            ..Self::default()
        };

        if let Some(max_visible) = flags.max_visible {
            app.notifications
                .configure(SettingsPatch::default().max_visible_toasts(max_visible));
        }

        if let Some(key) = config_warning {
            app.notifications.enqueue(
                Notification::warning(format!("Settings could not be read ({key}), using defaults"))
                    .with_title("Settings"),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let visible: usize = self
            .notifications
            .positions()
            .map(|position| self.notifications.visible_count(position))
            .sum();
        if visible == 0 {
            "SnapToast".to_string()
        } else {
            format!("SnapToast ({visible})")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::Tick(now) => {
                let events = self.notifications.tick(now);
                if !events.is_empty() {
                    log::trace!("tick produced {events:?}");
                }
            }
            Message::MessageChanged(value) => self.message = value,
            Message::TitleChanged(value) => self.title = value,
            Message::DurationChanged(value) => self.duration = value,
            Message::ModeSelected(mode) => self.mode = mode,
            Message::PositionSelected(position) => self.position = position,
            Message::Show => {
                let notification = self.build_notification(self.message.clone());
                self.notifications.enqueue(notification);
            }
            Message::ShowLong => {
                let notification = self.build_notification(LONG_MESSAGE.to_string());
                self.notifications.enqueue(notification);
            }
            Message::Flood => {
                for index in 1..=FLOOD_COUNT {
                    let notification =
                        self.build_notification(format!("{} #{index}", self.message));
                    self.notifications.enqueue(notification);
                }
            }
            Message::ClearAll => self.notifications.clear(),
            Message::MaxVisibleChanged(max) => {
                self.notifications
                    .configure(SettingsPatch::default().max_visible_toasts(max));
            }
            Message::SaveSettings => {
                let feedback = match config::save(&self.notifications.settings().to_config()) {
                    Ok(()) => Notification::success("Settings saved"),
                    Err(err) => {
                        log::warn!("failed to save settings: {err}");
                        Notification::danger(err.to_string()).with_title("Settings")
                    }
                };
                self.notifications
                    .enqueue(feedback.with_position(self.position));
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            manager: &self.notifications,
            message: &self.message,
            title: &self.title,
            duration: &self.duration,
            mode: self.mode,
            position: self.position,
        })
    }

    /// Builds a notification from the form fields.
    fn build_notification(&self, message: String) -> Notification {
        let mut notification = Notification::new(message)
            .with_mode(self.mode)
            .with_position(self.position)
            .with_title(self.title.clone());
        if let Some(duration) = self.requested_duration() {
            notification = notification.with_duration(duration);
        }
        notification
    }

    /// The duration typed in the form, `None` to use the configured default.
    fn requested_duration(&self) -> Option<Duration> {
        let text = self.duration.trim();
        if text.is_empty() {
            return None;
        }
        match text.parse::<u64>() {
            Ok(ms) => Some(Duration::from_millis(ms)),
            Err(_) => {
                log::debug!("ignoring invalid duration {text:?}");
                None
            }
        }
    }
}
