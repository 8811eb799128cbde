// SPDX-License-Identifier: MPL-2.0
//! User administration screen, reachable by admins from the dashboard.
//!
//! Lists every account with its role, offers per-row deletion, and carries a
//! small form for creating new accounts. All registry mutations are delegated
//! to the parent application through events; the screen only collects input.

use crate::auth::registry::UserRecord;
use crate::auth::Role;
use crate::i18n::fluent::I18n;
use crate::ui::components::password_input;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, checkbox, container, scrollable, text, text_input, Column, Container, Row,
        Text},
    Border, Element, Length, Theme,
};

/// State for the user administration screen (the add-user form).
#[derive(Debug, Clone, Default)]
pub struct State {
    new_username: String,
    new_password: password_input::State,
    admin_role: bool,
}

impl State {
    /// Create the screen with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_username(&self) -> &str {
        &self.new_username
    }

    pub fn admin_role(&self) -> bool {
        self.admin_role
    }

    /// Clear the add-user form after a submission.
    pub fn reset_form(&mut self) {
        self.new_username.clear();
        self.new_password.reset();
        self.admin_role = false;
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Accounts to list, in registry order.
    pub users: &'a [UserRecord],
}

/// Messages emitted by the screen.
#[derive(Debug, Clone)]
pub enum Message {
    NewUsernameChanged(String),
    NewPassword(password_input::Message),
    AdminRoleToggled(bool),
    AddPressed,
    DeletePressed(String),
    BackPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The admin asked to create an account. Validation happens upstream.
    AddRequested {
        username: String,
        password: String,
        role: Role,
    },
    /// The admin asked to delete the named account.
    DeleteRequested { username: String },
    Back,
}

/// Process a screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NewUsernameChanged(username) => {
            state.new_username = username;
            Event::None
        }
        Message::NewPassword(message) => {
            match password_input::update(&mut state.new_password, message) {
                password_input::Event::Submitted => add_event(state),
                password_input::Event::None => Event::None,
            }
        }
        Message::AdminRoleToggled(checked) => {
            state.admin_role = checked;
            Event::None
        }
        Message::AddPressed => add_event(state),
        Message::DeletePressed(username) => Event::DeleteRequested { username },
        Message::BackPressed => Event::Back,
    }
}

fn add_event(state: &State) -> Event {
    Event::AddRequested {
        username: state.new_username.clone(),
        password: state.new_password.value().to_string(),
        role: if state.admin_role {
            Role::Admin
        } else {
            Role::User
        },
    }
}

/// Render the user administration screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button =
        button(text(format!("← {}", ctx.i18n.tr("users-back"))).size(typography::BODY))
            .on_press(Message::BackPressed);

    let title = Text::new(ctx.i18n.tr("users-title")).size(typography::TITLE_LG);

    let list = build_user_list(&ctx);
    let add_form = build_add_form(&ctx);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Container::new(back_button).width(Length::Fixed(sizing::USER_LIST_WIDTH)))
        .push(title)
        .push(list)
        .push(add_form);

    Container::new(scrollable(content).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::MD)
        .into()
}

/// Build the account list with one row per registry entry.
fn build_user_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XS);
    for record in ctx.users {
        rows = rows.push(build_user_row(ctx, record));
    }

    Container::new(rows)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::USER_LIST_WIDTH))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Build a single account row: name, role badge, delete button.
fn build_user_row<'a>(ctx: &ViewContext<'a>, record: &'a UserRecord) -> Element<'a, Message> {
    let role_badge = Container::new(
        Text::new(ctx.i18n.tr(record.role.i18n_key())).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.strong.color.into()),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let delete = button(text(ctx.i18n.tr("users-delete")).size(typography::CAPTION))
        .on_press(Message::DeletePressed(record.username.clone()))
        .padding([spacing::XXS, spacing::XS])
        .style(button::danger);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(record.username.as_str()).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(role_badge)
        .push(delete)
        .into()
}

/// Build the add-user form.
fn build_add_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("users-add-heading")).size(typography::TITLE_SM);

    let username_placeholder = ctx.i18n.tr("users-username");
    let username_input = text_input(&username_placeholder, ctx.state.new_username())
        .on_input(Message::NewUsernameChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let password_field = password_input::view(password_input::ViewContext {
        i18n: ctx.i18n,
        state: &ctx.state.new_password,
        placeholder_key: "users-password",
    })
    .map(Message::NewPassword);

    let admin_toggle = checkbox(ctx.state.admin_role())
        .label(ctx.i18n.tr("users-admin-role"))
        .on_toggle(Message::AdminRoleToggled)
        .size(sizing::ICON_SM)
        .text_size(typography::BODY);

    let submit = button(text(ctx.i18n.tr("users-add-submit")).size(typography::BODY))
        .on_press(Message::AddPressed)
        .padding([spacing::XS, spacing::MD])
        .style(button::primary);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(username_input)
        .push(password_field)
        .push(admin_toggle)
        .push(submit);

    Container::new(form)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::USER_LIST_WIDTH))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::registry::UserRegistry;

    #[test]
    fn users_view_renders() {
        let i18n = I18n::default();
        let state = State::new();
        let mut registry = UserRegistry::default();
        registry.add("bob", "pw", Role::User);

        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            users: registry.users(),
        };
        let _element = view(ctx);
    }

    #[test]
    fn add_carries_form_values() {
        let mut state = State::new();
        update(&mut state, Message::NewUsernameChanged("dana".to_string()));
        update(
            &mut state,
            Message::NewPassword(password_input::Message::ValueChanged("pw".to_string())),
        );
        update(&mut state, Message::AdminRoleToggled(true));

        let event = update(&mut state, Message::AddPressed);
        match event {
            Event::AddRequested {
                username,
                password,
                role,
            } => {
                assert_eq!(username, "dana");
                assert_eq!(password, "pw");
                assert_eq!(role, Role::Admin);
            }
            _ => panic!("expected an add request"),
        }
    }

    #[test]
    fn add_defaults_to_regular_role() {
        let mut state = State::new();
        update(&mut state, Message::NewUsernameChanged("erin".to_string()));

        let event = update(&mut state, Message::AddPressed);
        match event {
            Event::AddRequested { role, .. } => assert_eq!(role, Role::User),
            _ => panic!("expected an add request"),
        }
    }

    #[test]
    fn delete_carries_the_username() {
        let mut state = State::new();
        let event = update(&mut state, Message::DeletePressed("bob".to_string()));
        match event {
            Event::DeleteRequested { username } => assert_eq!(username, "bob"),
            _ => panic!("expected a delete request"),
        }
    }

    #[test]
    fn back_emits_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::BackPressed);
        assert!(matches!(event, Event::Back));
    }

    #[test]
    fn reset_form_clears_every_field() {
        let mut state = State::new();
        update(&mut state, Message::NewUsernameChanged("dana".to_string()));
        update(
            &mut state,
            Message::NewPassword(password_input::Message::ValueChanged("pw".to_string())),
        );
        update(&mut state, Message::AdminRoleToggled(true));

        state.reset_form();
        assert_eq!(state.new_username(), "");
        assert!(!state.admin_role());

        let event = update(&mut state, Message::AddPressed);
        match event {
            Event::AddRequested {
                username,
                password,
                role,
            } => {
                assert_eq!(username, "");
                assert_eq!(password, "");
                assert_eq!(role, Role::User);
            }
            _ => panic!("expected an add request"),
        }
    }
}
