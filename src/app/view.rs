// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo form sits underneath the toast overlay so toasts can be fired at
//! every zone and interacted with while the form stays usable.

use super::Message;
use crate::config::MIN_MAX_VISIBLE_TOASTS;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{Manager, Mode, Position, Toast};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub manager: &'a Manager,
    pub message: &'a str,
    pub title: &'a str,
    pub duration: &'a str,
    pub mode: Mode,
    pub position: Position,
}

/// Renders the demo form with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = view_form(&ctx);

    let base = Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Toast::view_overlay(ctx.manager).map(Message::Notification))
        .into()
}

fn view_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let settings = ctx.manager.settings();
    let accent = ctx.mode.color().unwrap_or(palette::SLATE);

    let heading = Text::new("SnapToast").size(typography::HEADING);

    let message_input = text_input("Message", ctx.message)
        .on_input(Message::MessageChanged)
        .padding(spacing::XS);
    let title_input = text_input("Title (optional)", ctx.title)
        .on_input(Message::TitleChanged)
        .padding(spacing::XS);
    let duration_placeholder = format!(
        "Duration in ms (default {})",
        settings.default_duration().as_millis()
    );
    let duration_input = text_input(&duration_placeholder, ctx.duration)
        .on_input(Message::DurationChanged)
        .padding(spacing::XS);

    let pickers = Row::new()
        .spacing(spacing::XS)
        .push(pick_list(
            Mode::ALL,
            Some(ctx.mode),
            Message::ModeSelected,
        ))
        .push(pick_list(
            Position::ALL,
            Some(ctx.position),
            Message::PositionSelected,
        ));

    let triggers = Row::new()
        .spacing(spacing::XS)
        .push(action_button("Show", Message::Show, accent))
        .push(action_button("Long message", Message::ShowLong, accent))
        .push(action_button("Flood", Message::Flood, accent))
        .push(
            button(Text::new("Clear all").size(typography::BODY))
                .on_press(Message::ClearAll)
                .style(styles::button::dismiss),
        );

    let max_visible = settings.max_visible_toasts();
    let ceiling = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(format!("Max visible per zone: {max_visible}"))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("-"))
                .on_press_maybe(
                    (max_visible > MIN_MAX_VISIBLE_TOASTS)
                        .then(|| Message::MaxVisibleChanged(max_visible - 1)),
                )
                .style(styles::button::accent(palette::SLATE)),
        )
        .push(
            button(Text::new("+"))
                .on_press(Message::MaxVisibleChanged(max_visible + 1))
                .style(styles::button::accent(palette::SLATE)),
        )
        .push(action_button("Save", Message::SaveSettings, palette::SLATE));

    let manager = ctx.manager;
    let status: Vec<Element<'a, Message>> = manager
        .positions()
        .map(|position| {
            Text::new(format!(
                "{position}: {} shown, {} waiting",
                manager.visible_count(position),
                manager.pending_count(position)
            ))
            .size(typography::CAPTION)
            .into()
        })
        .collect();

    Column::new()
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .spacing(spacing::SM)
        .push(heading)
        .push(message_input)
        .push(title_input)
        .push(duration_input)
        .push(pickers)
        .push(triggers)
        .push(ceiling)
        .push(Column::with_children(status).spacing(spacing::XXS))
        .into()
}

fn action_button<'a>(label: &'a str, message: Message, accent: iced::Color) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::CONTROL_HEIGHT))
        .on_press(message)
        .style(styles::button::accent(accent))
        .into()
}
