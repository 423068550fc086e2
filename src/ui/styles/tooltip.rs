// SPDX-License-Identifier: MPL-2.0
//! Hover labels for icon-only controls.
//!
//! The close glyph on a toast carries no words, so it gets a short text label
//! on hover instead.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Label bubble that contrasts with the theme: paper on dark themes, ink on
/// light ones.
pub fn label_container(theme: &Theme) -> container::Style {
    let (fill, ink) = if theme.extended_palette().is_dark {
        (palette::PAPER, palette::INK)
    } else {
        (palette::INK, palette::PAPER)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CARD,
            ..fill
        })),
        border: Border {
            color: Color {
                a: opacity::FADED,
                ..palette::MIST
            },
            width: border::HAIRLINE,
            radius: radius::CONTROL.into(),
        },
        shadow: shadow::CARD,
        text_color: Some(ink),
        ..Default::default()
    }
}

/// Wraps `content` so `label` shows while the pointer rests on it.
pub fn labelled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: &'a str,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let bubble = Container::new(Text::new(label).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(label_container);

    tooltip(content, bubble, position).gap(spacing::XXS)
}
