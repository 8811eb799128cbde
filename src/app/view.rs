// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the toast overlay stacked on top.

use super::{Message, Screen};
use crate::auth::{Session, UserRecord};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::login::{self, ViewContext as LoginViewContext};
use crate::ui::toasts::{self, Toast};
use crate::ui::users::{self, ViewContext as UsersViewContext};
use chrono::{DateTime, Utc};
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: Option<&'a Session>,
    pub login: &'a login::State,
    pub users_screen: &'a users::State,
    pub users: &'a [UserRecord],
    pub last_login: Option<&'a DateTime<Utc>>,
    pub toasts: &'a toasts::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Login => view_login(ctx.login, ctx.i18n),
        Screen::Dashboard => view_dashboard(ctx.session, ctx.last_login, ctx.login, ctx.i18n),
        Screen::Users => view_users(ctx.users_screen, ctx.users, ctx.i18n),
    };

    let overlay = Toast::view_overlay(ctx.toasts).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .into()
}

fn view_login<'a>(state: &'a login::State, i18n: &'a I18n) -> Element<'a, Message> {
    login::view(LoginViewContext { i18n, state }).map(Message::Login)
}

fn view_dashboard<'a>(
    session: Option<&'a Session>,
    last_login: Option<&'a DateTime<Utc>>,
    login_state: &'a login::State,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    if let Some(session) = session {
        dashboard::view(DashboardViewContext {
            i18n,
            session,
            last_login,
        })
        .map(Message::Dashboard)
    } else {
        // Fallback if the session is missing
        view_login(login_state, i18n)
    }
}

fn view_users<'a>(
    state: &'a users::State,
    users: &'a [UserRecord],
    i18n: &'a I18n,
) -> Element<'a, Message> {
    users::view(UsersViewContext { i18n, state, users }).map(Message::Users)
}
