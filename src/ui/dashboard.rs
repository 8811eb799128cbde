// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen shown after a successful login.
//!
//! Displays the signed-in user, their role, and the previous login time, with
//! navigation to user administration (admins only) and logout.

use crate::auth::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use chrono::{DateTime, Utc};
use iced::{
    alignment::Horizontal,
    widget::{button, container, text, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    /// Time of the previous login, if one is on record.
    pub last_login: Option<&'a DateTime<Utc>>,
}

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    ManageUsersPressed,
    LogoutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ManageUsers,
    Logout,
}

/// Process a dashboard message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ManageUsersPressed => Event::ManageUsers,
        Message::LogoutPressed => Event::Logout,
    }
}

/// Render the dashboard.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let welcome = Text::new(ctx.i18n.tr_with_args(
        "dashboard-welcome",
        &[("username", ctx.session.username.as_str())],
    ))
    .size(typography::TITLE_LG);

    let role_name = ctx.i18n.tr(ctx.session.role.i18n_key());
    let role_line = ctx
        .i18n
        .tr_with_args("dashboard-role", &[("role", role_name.as_str())]);

    let last_login = ctx
        .last_login
        .map_or_else(|| "—".to_string(), format_timestamp);
    let last_login_line = ctx
        .i18n
        .tr_with_args("dashboard-last-login", &[("timestamp", last_login.as_str())]);

    let details = Column::new()
        .spacing(spacing::XS)
        .push(build_detail_line(role_line))
        .push(build_detail_line(last_login_line));

    let card = Container::new(details)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut actions = Row::new().spacing(spacing::SM);
    if ctx.session.is_admin() {
        actions = actions.push(
            button(text(ctx.i18n.tr("dashboard-manage-users")).size(typography::BODY))
                .on_press(Message::ManageUsersPressed)
                .padding([spacing::XS, spacing::MD])
                .style(button::primary),
        );
    }
    actions = actions.push(
        button(text(ctx.i18n.tr("dashboard-logout")).size(typography::BODY))
            .on_press(Message::LogoutPressed)
            .padding([spacing::XS, spacing::MD])
            .style(button::secondary),
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(welcome)
        .push(card)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Format a login timestamp for display.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Build one line of session details.
fn build_detail_line<'a>(line: String) -> Element<'a, Message> {
    Text::new(line)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
        .into()
}
