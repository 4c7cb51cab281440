// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{SystemClock, Toast, Toaster};
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toaster: &'a Toaster<SystemClock>,
    pub log: Vec<String>,
}

/// Renders the demo controls with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let controls = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new(i18n.tr("demo-show-info"))).on_press(Message::ShowInfo))
        .push(button(Text::new(i18n.tr("demo-show-alert"))).on_press(Message::ShowAlert))
        .push(button(Text::new(i18n.tr("demo-show-confirm"))).on_press(Message::ShowConfirm))
        .push(button(Text::new(i18n.tr("demo-show-sticky"))).on_press(Message::ShowSticky))
        .push(
            button(Text::new(i18n.tr("demo-show-actions"))).on_press(Message::ShowWithActions),
        )
        .push(
            button(Text::new(i18n.tr("demo-clear")))
                .on_press(Message::ClearAll)
                .style(button::secondary),
        );

    let log = ctx
        .log
        .into_iter()
        .rev()
        .fold(Column::new().spacing(spacing::XXS), |column, line| {
            column.push(Text::new(line).size(typography::CAPTION))
        });

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(controls)
            .push(log)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    Stack::new()
        .push(content)
        .push(Toast::view_overlay(ctx.toaster).map(Message::Toast))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
