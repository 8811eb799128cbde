// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers invoked from
//! `App::update`, plus the access-control checks that gate navigation and
//! registry mutations. Every user-visible outcome is reported by pushing a
//! [`FlashMessage`] with text already localized; nothing downstream of the
//! board interprets that text.

use super::{persisted_state, Message, Screen};
use crate::auth::{Role, Session, UserRegistry};
use crate::flash::{FlashBoard, FlashMessage};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::users::{self, Event as UsersEvent};
use chrono::Utc;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub session: &'a mut Option<Session>,
    pub registry: &'a mut UserRegistry,
    pub login: &'a mut login::State,
    pub users_screen: &'a mut users::State,
    pub flashes: &'a mut FlashBoard,
    pub persisted: &'a mut persisted_state::AppState,
    /// Whether the login form keeps the last username after logout.
    pub remember_username: bool,
}

/// Handles login screen messages.
pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match login::update(ctx.login, message) {
        LoginEvent::None => {}
        LoginEvent::SubmitRequested { username, password } => {
            attempt_login(ctx, &username, &password);
        }
    }
    Task::none()
}

/// Handles dashboard messages.
pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: &dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message) {
        DashboardEvent::None => {}
        DashboardEvent::ManageUsers => {
            if ensure_admin(ctx) {
                *ctx.screen = Screen::Users;
            }
        }
        DashboardEvent::Logout => logout(ctx),
    }
    Task::none()
}

/// Handles user administration messages.
pub fn handle_users_message(ctx: &mut UpdateContext<'_>, message: users::Message) -> Task<Message> {
    match users::update(ctx.users_screen, message) {
        UsersEvent::None => {}
        UsersEvent::Back => *ctx.screen = Screen::Dashboard,
        UsersEvent::AddRequested {
            username,
            password,
            role,
        } => add_user(ctx, &username, &password, role),
        UsersEvent::DeleteRequested { username } => delete_user(ctx, &username),
    }
    Task::none()
}

/// Checks the submitted credentials and opens a session on success.
fn attempt_login(ctx: &mut UpdateContext<'_>, username: &str, password: &str) {
    match ctx.registry.verify(username, password) {
        Some(role) => {
            *ctx.session = Some(Session::new(username, role));
            *ctx.screen = Screen::Dashboard;

            ctx.persisted.record_login(username, Utc::now());
            if let Some(key) = ctx.persisted.save() {
                push_warning_key(ctx, &key);
            }

            ctx.login.clear_password();
            let text = ctx.i18n.tr("flash-login-success");
            ctx.flashes.push(FlashMessage::success(text));
        }
        None => {
            ctx.login.clear_password();
            let text = ctx.i18n.tr("flash-login-invalid");
            ctx.flashes.push(FlashMessage::danger(text));
        }
    }
}

/// Closes the session and returns to the login screen.
fn logout(ctx: &mut UpdateContext<'_>) {
    *ctx.session = None;
    *ctx.screen = Screen::Login;

    *ctx.login = match ctx.persisted.last_username.as_ref() {
        Some(name) if ctx.remember_username => login::State::with_username(name.clone()),
        _ => login::State::new(),
    };

    let text = ctx.i18n.tr("flash-logged-out");
    ctx.flashes.push(FlashMessage::info(text));
}

/// Verifies that an admin session is active.
///
/// Without any session the user is sent back to the login screen with a
/// warning; with a non-admin session the action is refused with an error.
fn ensure_admin(ctx: &mut UpdateContext<'_>) -> bool {
    match ctx.session.as_ref() {
        None => {
            *ctx.screen = Screen::Login;
            let text = ctx.i18n.tr("flash-login-required");
            ctx.flashes.push(FlashMessage::warning(text));
            false
        }
        Some(session) if session.is_admin() => true,
        Some(_) => {
            let text = ctx.i18n.tr("flash-admin-required");
            ctx.flashes.push(FlashMessage::danger(text));
            false
        }
    }
}

/// Creates an account from the add-user form.
fn add_user(ctx: &mut UpdateContext<'_>, username: &str, password: &str, role: Role) {
    if !ensure_admin(ctx) {
        return;
    }

    if username.is_empty() || password.is_empty() {
        let text = ctx.i18n.tr("flash-fields-required");
        ctx.flashes.push(FlashMessage::danger(text));
        return;
    }

    if !ctx.registry.add(username, password, role) {
        let text = ctx
            .i18n
            .tr_with_args("flash-user-exists", &[("username", username)]);
        ctx.flashes.push(FlashMessage::danger(text));
        return;
    }

    let text = ctx
        .i18n
        .tr_with_args("flash-user-added", &[("username", username)]);
    ctx.flashes.push(FlashMessage::success(text));

    if let Some(key) = ctx.registry.save() {
        push_warning_key(ctx, &key);
    }
    ctx.users_screen.reset_form();
}

/// Deletes an account, refusing to delete the one currently signed in.
fn delete_user(ctx: &mut UpdateContext<'_>, username: &str) {
    if !ensure_admin(ctx) {
        return;
    }

    let is_own_account = ctx
        .session
        .as_ref()
        .map(|session| session.username == username)
        .unwrap_or(false);
    if is_own_account {
        let text = ctx.i18n.tr("flash-self-delete");
        ctx.flashes.push(FlashMessage::danger(text));
        return;
    }

    if ctx.registry.remove(username) {
        let text = ctx.i18n.tr("flash-user-deleted");
        ctx.flashes.push(FlashMessage::success(text));

        if let Some(key) = ctx.registry.save() {
            push_warning_key(ctx, &key);
        }
    }
}

/// Pushes a warning flash for a persistence failure, localizing its key.
fn push_warning_key(ctx: &mut UpdateContext<'_>, key: &str) {
    let text = ctx.i18n.tr(key);
    ctx.flashes.push(FlashMessage::warning(text));
}
