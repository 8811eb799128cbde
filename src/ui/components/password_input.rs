// SPDX-License-Identifier: MPL-2.0
//! Password field with a visibility toggle.
//!
//! The field starts masked. A toggle button inverts the visibility: masked
//! becomes plain text, plain text becomes masked. Invoking the toggle twice
//! returns the field to where it started, so there is no drift between the
//! button state and the field state.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, text_input, Row};
use iced::{alignment, Element, Length};

/// State for one password field.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Current field contents.
    value: String,
    /// Whether the contents are shown as plain text.
    revealed: bool,
}

impl State {
    /// Creates an empty, masked field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Inverts the visibility of the field contents.
    pub fn toggle_visibility(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Clears the contents and re-masks the field.
    pub fn reset(&mut self) {
        self.value.clear();
        self.revealed = false;
    }

    /// Takes the contents out of the field, leaving it reset.
    #[must_use]
    pub fn take_value(&mut self) -> String {
        let value = std::mem::take(&mut self.value);
        self.revealed = false;
        value
    }
}

/// Contextual data needed to render the field.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Translation key for the input placeholder.
    pub placeholder_key: &'a str,
}

/// Messages emitted by the field.
#[derive(Debug, Clone)]
pub enum Message {
    ValueChanged(String),
    ToggleVisibility,
    Submitted,
}

/// Events propagated to the parent screen.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user pressed enter inside the field.
    Submitted,
}

/// Process a field message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ValueChanged(value) => {
            state.value = value;
            Event::None
        }
        Message::ToggleVisibility => {
            state.toggle_visibility();
            Event::None
        }
        Message::Submitted => Event::Submitted,
    }
}

/// Render the field with its toggle button.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let placeholder = ctx.i18n.tr(ctx.placeholder_key);

    let input = text_input(&placeholder, ctx.state.value())
        .secure(!ctx.state.is_revealed())
        .on_input(Message::ValueChanged)
        .on_submit(Message::Submitted)
        .padding(spacing::XS)
        .size(typography::BODY);

    let toggle_label = if ctx.state.is_revealed() {
        ctx.i18n.tr("password-hide")
    } else {
        ctx.i18n.tr("password-show")
    };
    let toggle = button(text(toggle_label).size(typography::CAPTION))
        .on_press(Message::ToggleVisibility)
        .padding(spacing::XS);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(toggle)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_starts_masked() {
        let state = State::new();
        assert!(!state.is_revealed());
        assert_eq!(state.value(), "");
    }

    #[test]
    fn toggle_inverts_visibility() {
        let mut state = State::new();
        state.toggle_visibility();
        assert!(state.is_revealed());

        state.toggle_visibility();
        assert!(!state.is_revealed());
    }

    #[test]
    fn double_toggle_restores_either_starting_state() {
        // From masked
        let mut masked = State::new();
        masked.toggle_visibility();
        masked.toggle_visibility();
        assert!(!masked.is_revealed());

        // From revealed
        let mut revealed = State::new();
        revealed.toggle_visibility();
        assert!(revealed.is_revealed());
        revealed.toggle_visibility();
        revealed.toggle_visibility();
        assert!(revealed.is_revealed());
    }

    #[test]
    fn update_value_changed_stores_text() {
        let mut state = State::new();
        let event = update(&mut state, Message::ValueChanged("hunter2".to_string()));
        assert!(matches!(event, Event::None));
        assert_eq!(state.value(), "hunter2");
    }

    #[test]
    fn update_submit_propagates_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::Submitted);
        assert!(matches!(event, Event::Submitted));
    }

    #[test]
    fn take_value_resets_the_field() {
        let mut state = State::new();
        state.value = "secret".to_string();
        state.toggle_visibility();

        assert_eq!(state.take_value(), "secret");
        assert_eq!(state.value(), "");
        assert!(!state.is_revealed());
    }

    #[test]
    fn reset_clears_and_remasks() {
        let mut state = State::new();
        state.value = "secret".to_string();
        state.toggle_visibility();

        state.reset();
        assert_eq!(state.value(), "");
        assert!(!state.is_revealed());
    }

    #[test]
    fn password_input_view_renders() {
        let i18n = I18n::default();
        let masked = State::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &masked,
            placeholder_key: "login-password",
        });

        let mut revealed = State::new();
        revealed.toggle_visibility();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &revealed,
            placeholder_key: "login-password",
        });
    }
}
