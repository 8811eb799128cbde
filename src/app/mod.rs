// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together the domains (screens, localization,
//! accounts, notifications) and translates messages into side effects like
//! registry persistence or navigation. This file intentionally keeps policy
//! decisions (access control, persistence format, notification flow) close to
//! the main update loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::auth::{Session, UserRegistry};
use crate::flash::{self, FlashBoard, FlashMessage};
use crate::i18n::fluent::I18n;
use crate::ui::login;
use crate::ui::theming::ThemeMode;
use crate::ui::toasts;
use crate::ui::users;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted accounts.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// The authenticated account, if any.
    session: Option<Session>,
    /// On-disk account store.
    registry: UserRegistry,
    login: login::State,
    users_screen: users::State,
    /// Pending notifications, drained into toasts after every update.
    flashes: FlashBoard,
    /// Toast presentation state (stacking, timing, dismissal).
    toasts: toasts::Manager,
    /// Persisted application state (last username, last login time).
    app_state: persisted_state::AppState,
    /// Whether the login form keeps the last username after logout.
    remember_username: bool,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("signed_in", &self.session.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Login,
            session: None,
            registry: UserRegistry::with_default_admin(),
            login: login::State::new(),
            users_screen: users::State::new(),
            flashes: FlashBoard::new(),
            toasts: toasts::Manager::new(),
            app_state: persisted_state::AppState::default(),
            remember_username: true,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from the config, registry, and saved
    /// state files, then surfaces any queued notifications left for this run.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;
        app.remember_username = config.session.remember_username.unwrap_or(true);

        let (app_state, state_warning) = persisted_state::AppState::load();
        app.app_state = app_state;

        let (registry, registry_warning) = UserRegistry::load();
        app.registry = registry;

        // Prefill the login form with the previously used username
        if app.remember_username {
            if let Some(name) = app.app_state.last_username.clone() {
                app.login = login::State::with_username(name);
            }
        }

        // Show warnings for config/state/registry loading issues
        for key in [config_warning, state_warning, registry_warning]
            .into_iter()
            .flatten()
        {
            let text = app.i18n.tr(&key);
            app.flashes.push(FlashMessage::warning(text));
        }

        // Pick up notifications an outer process queued for this run
        let handoff_path = flags.handoff_path.map(PathBuf::from).or_else(|| {
            paths::get_app_data_dir().map(|dir| dir.join(flash::handoff::HANDOFF_FILE))
        });
        if let Some(path) = handoff_path {
            match flash::handoff::consume(&path) {
                Ok(Some(mut board)) => {
                    for message in board.take_all() {
                        app.flashes.push(message);
                    }
                }
                Ok(None) => {}
                Err(_) => {
                    let text = app.i18n.tr("notification-handoff-parse-error");
                    app.flashes.push(FlashMessage::warning(text));
                }
            }
        }

        flash::present(Some(&mut app.flashes), &mut app.toasts);

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match &self.session {
            Some(session) => format!("{} - {app_name}", session.username),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.toasts.has_toasts())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            session: &mut self.session,
            registry: &mut self.registry,
            login: &mut self.login,
            users_screen: &mut self.users_screen,
            flashes: &mut self.flashes,
            persisted: &mut self.app_state,
            remember_username: self.remember_username,
        };

        let task = match message {
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, &dashboard_message)
            }
            Message::Users(users_message) => update::handle_users_message(&mut ctx, users_message),
            Message::Toast(toast_message) => {
                self.toasts.handle_message(&toast_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Advance toast expiry, fades, and queue promotion
                self.toasts.tick();
                Task::none()
            }
        };

        // Turn any flashes the handlers pushed into toast submissions
        flash::present(Some(&mut self.flashes), &mut self.toasts);

        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: self.session.as_ref(),
            login: &self.login,
            users_screen: &self.users_screen,
            users: self.registry.users(),
            last_login: self.app_state.last_login.as_ref(),
            toasts: &self.toasts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::ui::components::password_input;
    use crate::ui::dashboard;
    use std::fs;
    use tempfile::tempdir;

    fn with_temp_dirs<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous_data = std::env::var(paths::ENV_DATA_DIR).ok();
        let previous_config = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_DATA_DIR, temp_dir.path());
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous_data {
            std::env::set_var(paths::ENV_DATA_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_DATA_DIR);
        }
        if let Some(value) = previous_config {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn english_app() -> App {
        let mut app = App::default();
        app.i18n.set_locale("en-US".parse().unwrap());
        app
    }

    fn sign_in(app: &mut App, username: &str, password: &str) {
        let _ = app.update(Message::Login(login::Message::UsernameChanged(
            username.to_string(),
        )));
        let _ = app.update(Message::Login(login::Message::Password(
            password_input::Message::ValueChanged(password.to_string()),
        )));
        let _ = app.update(Message::Login(login::Message::SubmitPressed));
    }

    fn visible_texts(app: &App) -> Vec<String> {
        app.toasts
            .visible()
            .map(|entry| entry.content().text.clone())
            .collect()
    }

    #[test]
    fn new_starts_on_login_screen() {
        with_temp_dirs(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Login);
            assert!(app.session.is_none());
            assert_eq!(app.registry.len(), 1);
            assert_eq!(app.toasts.visible_count(), 0);
        });
    }

    #[test]
    fn login_with_default_admin_succeeds() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "admin123");

            assert_eq!(app.screen, Screen::Dashboard);
            assert_eq!(
                app.session.as_ref().map(|s| s.username.as_str()),
                Some("admin")
            );
            assert_eq!(visible_texts(&app), vec!["Login successful!"]);

            let entry = app.toasts.visible().next().unwrap();
            assert_eq!(entry.content().icon, Some("✅"));
        });
    }

    #[test]
    fn login_with_wrong_password_is_refused() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "nope");

            assert_eq!(app.screen, Screen::Login);
            assert!(app.session.is_none());
            assert_eq!(visible_texts(&app), vec!["Invalid username or password."]);

            let entry = app.toasts.visible().next().unwrap();
            assert_eq!(entry.content().icon, Some("❌"));
        });
    }

    #[test]
    fn logout_returns_to_login_with_username_prefilled() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "admin123");

            let _ = app.update(Message::Dashboard(dashboard::Message::LogoutPressed));

            assert_eq!(app.screen, Screen::Login);
            assert!(app.session.is_none());
            assert_eq!(app.login.username(), "admin");
            assert!(visible_texts(&app).contains(&"You have been logged out.".to_string()));
        });
    }

    #[test]
    fn non_admin_cannot_open_user_management() {
        let mut app = App {
            session: Some(Session::new("bob", Role::User)),
            screen: Screen::Dashboard,
            ..english_app()
        };

        let _ = app.update(Message::Dashboard(dashboard::Message::ManageUsersPressed));

        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(
            visible_texts(&app),
            vec!["Access denied: You must be an admin to view this page."]
        );
    }

    #[test]
    fn admin_can_add_and_delete_users() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "admin123");
            let _ = app.update(Message::Dashboard(dashboard::Message::ManageUsersPressed));
            assert_eq!(app.screen, Screen::Users);

            let _ = app.update(Message::Users(users::Message::NewUsernameChanged(
                "bob".to_string(),
            )));
            let _ = app.update(Message::Users(users::Message::NewPassword(
                password_input::Message::ValueChanged("hunter2".to_string()),
            )));
            let _ = app.update(Message::Users(users::Message::AddPressed));

            assert!(app.registry.contains("bob"));
            assert_eq!(app.users_screen.new_username(), "");
            assert!(visible_texts(&app).contains(&"User bob added successfully!".to_string()));

            let _ = app.update(Message::Users(users::Message::DeletePressed(
                "bob".to_string(),
            )));
            assert!(!app.registry.contains("bob"));
            assert!(visible_texts(&app).contains(&"User deleted successfully.".to_string()));
        });
    }

    #[test]
    fn deleting_own_account_is_refused() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "admin123");
            let _ = app.update(Message::Dashboard(dashboard::Message::ManageUsersPressed));

            let _ = app.update(Message::Users(users::Message::DeletePressed(
                "admin".to_string(),
            )));

            assert!(app.registry.contains("admin"));
            assert!(
                visible_texts(&app).contains(&"You cannot delete your own account.".to_string())
            );
        });
    }

    #[test]
    fn adding_a_user_requires_both_fields() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "admin123");
            let _ = app.update(Message::Dashboard(dashboard::Message::ManageUsersPressed));

            let _ = app.update(Message::Users(users::Message::AddPressed));

            assert_eq!(app.registry.len(), 1);
            assert!(
                visible_texts(&app).contains(&"Username and password are required.".to_string())
            );
        });
    }

    #[test]
    fn duplicate_username_is_refused() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "admin123");
            let _ = app.update(Message::Dashboard(dashboard::Message::ManageUsersPressed));

            let _ = app.update(Message::Users(users::Message::NewUsernameChanged(
                "admin".to_string(),
            )));
            let _ = app.update(Message::Users(users::Message::NewPassword(
                password_input::Message::ValueChanged("other".to_string()),
            )));
            let _ = app.update(Message::Users(users::Message::AddPressed));

            assert_eq!(app.registry.len(), 1);
            assert!(visible_texts(&app).contains(&"Username admin already exists.".to_string()));
        });
    }

    #[test]
    fn handoff_descriptors_become_toasts_at_startup() {
        with_temp_dirs(|dir| {
            fs::write(
                dir.join(flash::handoff::HANDOFF_FILE),
                r#"
[[message]]
category = "success"
text = "Saved."

[[message]]
category = "danger"
text = "Failed to save."
"#,
            )
            .expect("write handoff");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(visible_texts(&app), vec!["Saved.", "Failed to save."]);
            let icons: Vec<Option<&str>> =
                app.toasts.visible().map(|e| e.content().icon).collect();
            assert_eq!(icons, vec![Some("✅"), Some("❌")]);

            // The handoff file shows its descriptors exactly once
            assert!(!dir.join(flash::handoff::HANDOFF_FILE).exists());
        });
    }

    #[test]
    fn malformed_handoff_surfaces_a_warning() {
        with_temp_dirs(|dir| {
            fs::write(dir.join(flash::handoff::HANDOFF_FILE), "not = valid = toml")
                .expect("write handoff");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.toasts.visible_count(), 1);
            let entry = app.toasts.visible().next().unwrap();
            assert_eq!(entry.content().icon, Some("⚠️"));
        });
    }

    #[test]
    fn title_shows_signed_in_user() {
        let app = english_app();
        assert_eq!(app.title(), "IcedFlash");

        let app = App {
            session: Some(Session::new("carol", Role::User)),
            ..english_app()
        };
        assert_eq!(app.title(), "carol - IcedFlash");
    }

    #[test]
    fn dismissing_a_toast_starts_its_exit() {
        with_temp_dirs(|_| {
            let mut app = english_app();
            sign_in(&mut app, "admin", "nope");

            let id = app.toasts.visible().next().unwrap().id();
            let _ = app.update(Message::Toast(toasts::Message::Dismiss(id)));

            assert!(app.toasts.visible().next().unwrap().is_exiting());
        });
    }
}
