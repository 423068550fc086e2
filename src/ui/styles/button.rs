// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button tinted with `accent`, used by the demo triggers.
pub fn accent(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: opacity::CARD,
                ..accent
            },
            button::Status::Disabled => Color {
                a: opacity::FADED,
                ..accent
            },
            button::Status::Active | button::Status::Pressed => accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::PAPER,
            border: Border {
                color: accent,
                width: border::HAIRLINE,
                radius: radius::CONTROL.into(),
            },
            shadow: shadow::FLAT,
            snap: true,
        }
    }
}

/// Borderless icon button for the toast close control.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(opacity::HOVER_TINT),
        button::Status::Pressed => Some(opacity::PRESSED_TINT),
        button::Status::Active | button::Status::Disabled => None,
    }
    .map(|alpha| {
        Background::Color(Color {
            a: alpha,
            ..palette::MIST
        })
    });

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::CONTROL.into(),
            ..Border::default()
        },
        shadow: shadow::FLAT,
        snap: true,
    }
}

/// Text-only link button for the expand toggle.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.extended_palette().primary;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => primary.strong.color,
        button::Status::Active | button::Status::Disabled => primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::FLAT,
        snap: true,
    }
}
