// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering flash submissions.
//!
//! Toasts appear as small cards on the gradient background their submission
//! carries, with the icon glyph, the message text rendered verbatim, and a
//! dismiss button when the submission is closable.

use super::entry::ToastEntry;
use super::manager::{Manager, Message};
use crate::flash::Placement;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Background, Color, Element, Length, Shadow, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast card.
    pub fn view(entry: &ToastEntry) -> Element<'_, Message> {
        let options = entry.options();
        let content = entry.content();
        let alpha = entry.alpha();

        // Layout: [icon] [message] [dismiss]
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center);

        if let Some(icon) = content.icon {
            let icon_widget = Text::new(icon)
                .size(typography::BODY_LG)
                .shaping(text::Shaping::Advanced);
            row = row.push(Container::new(icon_widget).padding(spacing::XXS));
        }

        // The text is opaque: markup-like input renders literally
        let message_widget = Text::new(content.text.as_str())
            .size(typography::BODY)
            .shaping(text::Shaping::Advanced)
            .style(move |_theme: &Theme| text::Style {
                color: Some(palette::WHITE.scale_alpha(alpha)),
            });
        row = row.push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

        if options.closable {
            let dismiss_button = button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Dismiss(entry.id()))
                .padding(spacing::XXS)
                .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));
            row = row.push(dismiss_button);
        }

        let background = options.background.scale_alpha(alpha);
        let card = Container::new(row)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| card_style(background, alpha));

        // The submission controls any extra padding around the card
        let padded = Container::new(card).padding(options.padding);

        mouse_area(padded)
            .on_enter(Message::HoverChanged(entry.id(), true))
            .on_exit(Message::HoverChanged(entry.id(), false))
            .into()
    }

    /// Renders the toast overlay with all visible toasts.
    ///
    /// Builds one stacked region per anchor that has toasts, each a vertical
    /// column in submission order (oldest at the top).
    pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
        if manager.visible_count() == 0 {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

        for placement in Placement::ALL {
            let cards: Vec<Element<'_, Message>> = manager
                .visible()
                .filter(|entry| entry.options().placement == placement)
                .map(Self::view)
                .collect();

            if cards.is_empty() {
                continue;
            }

            let (align_x, align_y) = anchors(placement);
            let column = Column::with_children(cards)
                .spacing(spacing::XS)
                .align_x(align_x);

            stack = stack.push(
                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(align_x)
                    .align_y(align_y)
                    .padding(spacing::MD),
            );
        }

        stack.into()
    }
}

/// Maps an anchor to container alignments.
fn anchors(placement: Placement) -> (alignment::Horizontal, alignment::Vertical) {
    match placement {
        Placement::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Placement::TopCenter => (alignment::Horizontal::Center, alignment::Vertical::Top),
        Placement::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Placement::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Placement::BottomCenter => (alignment::Horizontal::Center, alignment::Vertical::Bottom),
        Placement::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

/// Style function for the toast card.
fn card_style(background: Background, alpha: f32) -> container::Style {
    container::Style {
        background: Some(background),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: palette::BLACK.scale_alpha(alpha * opacity::OVERLAY_SUBTLE),
            ..shadow::MD
        },
        text_color: Some(palette::WHITE.scale_alpha(alpha)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(_theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = palette::WHITE.scale_alpha(alpha);

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE * alpha,
                ..palette::WHITE
            })),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM * alpha,
                ..palette::WHITE
            })),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
