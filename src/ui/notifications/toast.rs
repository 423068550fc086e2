// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are drawn as small cards with a mode-colored accent, an optional
//! header and an expand toggle for long messages. Each screen zone gets its
//! own stacked column in the overlay.

use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationId, Position};
use super::presentation::{self, HeightLimit};
use crate::config::Settings;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::styles;
use iced::widget::{
    button, container, keyed_column, mouse_area, text, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Alignment, Background, Border, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, settings: &'a Settings) -> Element<'a, Message> {
        let id = notification.id();
        let accent = notification.mode().color();
        let look = presentation::present(notification, settings);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut body = Column::new().spacing(spacing::XXS).push(message_widget);
        if let Some(toggle) = look.toggle {
            body = body.push(
                button(Text::new(toggle.label).size(typography::CAPTION))
                    .on_press(Message::ToggleExpand(id))
                    .padding(0.0)
                    .style(styles::button::link),
            );
        }

        // Without a header the close control sits next to the message.
        let mut body_row = Row::new()
            .spacing(spacing::SM)
            .push(Container::new(body).width(Length::Fill));
        if notification.title().is_none() {
            body_row = body_row.push(close_button(id));
        }

        let mut content = Column::new().spacing(spacing::XS);
        if let Some(title) = notification.title() {
            let header = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(mode_dot(accent))
                .push(
                    Container::new(Text::new(title).size(typography::BODY))
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Left),
                )
                .push(close_button(id));
            content = content.push(header);
        }
        content = content.push(body_row);

        let mut card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .clip(true)
            .style(move |theme: &Theme| {
                toast_container_style(theme, accent, look.paused, look.shown)
            });
        if let HeightLimit::Clipped(height) = look.height {
            card = card.max_height(height);
        }

        mouse_area(card)
            .on_enter(Message::HoverEnter(id))
            .on_exit(Message::HoverLeave(id))
            .on_press(Message::Click(id))
            .into()
    }

    /// Renders every zone's visible toasts over the whole window.
    ///
    /// Zone columns are keyed by notification id so hover state stays with
    /// its toast when others are inserted or removed around it.
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        for position in manager.positions() {
            let toasts = zone_toasts(manager, position);
            if toasts.is_empty() {
                continue;
            }

            let (align_x, align_y) = zone_alignment(position);
            let column = keyed_column(toasts)
                .spacing(spacing::XS)
                .align_items(Alignment::from(align_x));

            layers = layers.push(
                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(align_x)
                    .align_y(align_y)
                    .padding(spacing::MD),
            );
        }

        layers.into()
    }
}

/// Visible toasts of one zone in display order, tagged with their ids.
fn zone_toasts(
    manager: &Manager,
    position: Position,
) -> Vec<(NotificationId, Element<'_, Message>)> {
    let settings = manager.settings();
    manager
        .visible(position)
        .map(|notification| (notification.id(), Toast::view(notification, settings)))
        .collect()
}

/// Hover label of the close glyph.
const CLOSE_LABEL: &str = "Close notification";

fn close_button<'a>(id: NotificationId) -> Element<'a, Message> {
    let glyph = button(Text::new("×").size(typography::BODY))
        .on_press(Message::Close(id))
        .padding(spacing::XXS)
        .style(styles::button::dismiss);

    styles::tooltip::labelled(glyph, CLOSE_LABEL, iced::widget::tooltip::Position::Left).into()
}

/// Small round marker in the mode's accent color.
fn mode_dot<'a>(accent: Option<Color>) -> Element<'a, Message> {
    let color = accent.unwrap_or(palette::MIST);
    Container::new(text(""))
        .width(Length::Fixed(sizing::MODE_DOT))
        .height(Length::Fixed(sizing::MODE_DOT))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::PILL.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}

/// Where a zone's column is anchored inside the window.
fn zone_alignment(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    use alignment::{Horizontal, Vertical};

    match position {
        Position::TopRight => (Horizontal::Right, Vertical::Top),
        Position::TopLeft => (Horizontal::Left, Vertical::Top),
        Position::BottomRight => (Horizontal::Right, Vertical::Bottom),
        Position::BottomLeft => (Horizontal::Left, Vertical::Bottom),
        Position::CenterTop => (Horizontal::Center, Vertical::Top),
        Position::CenterBottom => (Horizontal::Center, Vertical::Bottom),
    }
}

/// Style function for the toast container.
///
/// Entering and leaving toasts are drawn faded; pinned toasts get a thicker
/// accent. Unstyled toasts fall back to a thin neutral border.
fn toast_container_style(
    theme: &Theme,
    accent: Option<Color>,
    paused: bool,
    shown: bool,
) -> container::Style {
    let extended = theme.extended_palette();
    let alpha = if shown {
        opacity::CARD
    } else {
        opacity::FADED
    };

    let (border_color, mut width) = match accent {
        Some(color) => (color, border::ACCENT),
        None => (extended.background.strong.color, border::HAIRLINE),
    };
    if paused {
        width = border::PINNED;
    }

    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..extended.background.base.color
        })),
        border: Border {
            color: Color {
                a: border_color.a * alpha,
                ..border_color
            },
            width,
            radius: radius::CARD.into(),
        },
        shadow: shadow::CARD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
