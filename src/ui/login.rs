// SPDX-License-Identifier: MPL-2.0
//! Login screen with username and password fields.
//!
//! The screen collects credentials and hands them to the parent application
//! as a [`Event::SubmitRequested`] event. It never checks them itself, so the
//! credential store stays behind the application layer.

use crate::i18n::fluent::I18n;
use crate::ui::components::password_input;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, text, text_input, Column, Container, Text},
    Element, Length,
};

/// State for the login screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    username: String,
    password: password_input::State,
}

impl State {
    /// Create an empty login form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a login form with the username pre-filled.
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password_input::State::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Clear the password field, keeping the username.
    pub fn clear_password(&mut self) {
        self.password.reset();
    }

    /// Clear the whole form.
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.reset();
    }
}

/// Contextual data needed to render the login screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the login screen.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    Password(password_input::Message),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user asked to sign in with the given credentials.
    SubmitRequested { username: String, password: String },
}

/// Process a login screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::UsernameChanged(username) => {
            state.username = username;
            Event::None
        }
        Message::Password(message) => match password_input::update(&mut state.password, message) {
            password_input::Event::Submitted => submit_event(state),
            password_input::Event::None => Event::None,
        },
        Message::SubmitPressed => submit_event(state),
    }
}

fn submit_event(state: &State) -> Event {
    Event::SubmitRequested {
        username: state.username.clone(),
        password: state.password.value().to_string(),
    }
}

/// Render the login screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("login-title")).size(typography::TITLE_LG);

    let username_label = text(ctx.i18n.tr("login-username")).size(typography::BODY);
    let username_placeholder = ctx.i18n.tr("login-username");
    let username_input = text_input(&username_placeholder, ctx.state.username())
        .on_input(Message::UsernameChanged)
        .on_submit(Message::SubmitPressed)
        .padding(spacing::XS)
        .size(typography::BODY);

    let password_label = text(ctx.i18n.tr("login-password")).size(typography::BODY);
    let password_field = password_input::view(password_input::ViewContext {
        i18n: ctx.i18n,
        state: &ctx.state.password,
        placeholder_key: "login-password",
    })
    .map(Message::Password);

    let submit = button(text(ctx.i18n.tr("login-submit")).size(typography::BODY))
        .on_press(Message::SubmitPressed)
        .padding([spacing::XS, spacing::MD])
        .style(button::primary);

    let form = Column::new()
        .spacing(spacing::SM)
        .push(username_label)
        .push(username_input)
        .push(password_label)
        .push(password_field)
        .push(Container::new(submit).padding([spacing::XS, 0.0]));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(Container::new(form).width(Length::Fixed(sizing::FORM_WIDTH)));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
