// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications with iced.
//!
//! Toasts are drawn as small cards with a kind-colored accent border, an
//! optional bold title, the message, and a row of action buttons. Every
//! anchor gets its own column, layered over the application content.

use super::clock::Clock;
use super::manager::{Key, Message, Toaster};
use super::notification::{Body, Control, Kind, Lifecycle, Notification};
use super::position::Position;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, keyboard, Color, Element, Font, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    pub fn view(notification: &Notification) -> Element<'_, Message> {
        let id = notification.id();
        let state = CardState::of(notification);
        let accent_color = accent(notification.kind());

        // Title region is kept even when empty so bodies line up across toasts
        let title = Text::new(notification.title().unwrap_or_default())
            .size(typography::TITLE_SM)
            .font(Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            });

        let mut header = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(title).width(Length::Fill));

        if let Some(label) = notification.dismiss_label() {
            let dismiss = button(text("✕").size(typography::CAPTION))
                .on_press(Message::Clicked(id, Control::Dismiss))
                .padding(spacing::XXS)
                .style(dismiss_button_style);
            header = header.push(iced::widget::tooltip(
                dismiss,
                text(label).size(typography::CAPTION),
                iced::widget::tooltip::Position::Bottom,
            ));
        }

        let message = Text::new(body_text(notification.body()).unwrap_or_default())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let mut content = Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(Container::new(message).width(Length::Fill));

        if !notification.buttons().is_empty() {
            let actions = notification
                .buttons()
                .iter()
                .enumerate()
                .fold(Row::new().spacing(spacing::XS), |row, (index, action)| {
                    row.push(
                        button(text(action.label.as_str()).size(typography::CAPTION))
                            .on_press(Message::Clicked(id, Control::Button(index)))
                            .padding([spacing::XXS, spacing::SM])
                            .style(action_button_style(&action.class)),
                    )
                });
            content = content.push(
                Container::new(actions)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );
        }

        let card = Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, state));

        mouse_area(card)
            .on_enter(Message::PointerEntered(id))
            .on_exit(Message::PointerLeft(id))
            .into()
    }

    /// Renders every container of `toaster` as an overlay, one column per
    /// anchor, in the order the registry lists them.
    pub fn view_overlay<C: Clock>(toaster: &Toaster<C>) -> Element<'_, Message> {
        let layers: Vec<Element<'_, Message>> = toaster
            .registry()
            .containers()
            .filter(|container| !container.is_empty())
            .map(|container| {
                let position = container.position();
                let toasts: Vec<Element<'_, Message>> =
                    toaster.toasts_at(position).map(Self::view).collect();
                let (align_x, align_y) = alignment_for(position);

                Container::new(
                    Column::with_children(toasts)
                        .spacing(spacing::XS)
                        .align_x(align_x),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(align_x)
                .align_y(align_y)
                .padding(spacing::MD)
                .into()
            })
            .collect();

        if layers.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            Stack::with_children(layers)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }

    /// Maps an iced key to the keys toasts react to.
    #[must_use]
    pub fn key(key: &keyboard::Key) -> Key {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Key::Escape,
            keyboard::Key::Named(keyboard::key::Named::Enter) => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// Text shown for a body: plain text, or a fragment carrying a string.
fn body_text(body: &Body) -> Option<&str> {
    match body {
        Body::Text(text) => Some(text),
        Body::Fragment(fragment) => fragment
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| fragment.downcast_ref::<&'static str>().copied()),
    }
}

fn accent(kind: Kind) -> Color {
    match kind {
        Kind::Info => palette::INFO_500,
        Kind::Alert => palette::ERROR_500,
        Kind::Confirm => palette::WARNING_500,
    }
}

fn alignment_for(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    let vertical = if position.is_bottom() {
        alignment::Vertical::Bottom
    } else {
        alignment::Vertical::Top
    };
    let horizontal = match position {
        Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
        Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
        Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
    };
    (horizontal, vertical)
}

/// How a card is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardState {
    Idle,
    /// Under the pointer; its timer is paused.
    Hovered,
    /// Exit in progress.
    Closing,
}

impl CardState {
    fn of(notification: &Notification) -> Self {
        if notification.lifecycle() == Lifecycle::Closing {
            CardState::Closing
        } else if notification.is_hovered() {
            CardState::Hovered
        } else {
            CardState::Idle
        }
    }
}

fn faded(color: Color, closing: bool) -> Color {
    if closing {
        Color {
            a: color.a * opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast card. Closing toasts are drawn faded,
/// hovered ones lifted.
fn toast_container_style(theme: &Theme, accent_color: Color, state: CardState) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let closing = state == CardState::Closing;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, closing))),
        border: iced::Border {
            color: faded(accent_color, closing),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: match state {
            CardState::Idle => shadow::MD,
            CardState::Hovered => shadow::LG,
            CardState::Closing => shadow::NONE,
        },
        text_color: Some(faded(theme.palette().text, closing)),
        ..Default::default()
    }
}

/// Picks the button style for an action class name.
fn action_button_style(class: &str) -> fn(&Theme, button::Status) -> button::Style {
    match class {
        "primary" => button::primary,
        "danger" => button::danger,
        "success" => button::success,
        _ => button::secondary,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), base.text),
        button::Status::Disabled => (
            None,
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
