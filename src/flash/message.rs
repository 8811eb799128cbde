// SPDX-License-Identifier: MPL-2.0
//! Flash messages and the board that holds them until presentation.

use super::category::Category;
use std::collections::VecDeque;

/// One pending notification: a category plus opaque display text.
///
/// Messages have no identity beyond their position on the board. They are
/// consumed by a single presentation step and never stored, mutated, or
/// deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub category: Category,
    pub text: String,
}

impl FlashMessage {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    /// Builds a message from raw descriptor fields.
    ///
    /// Missing text yields an empty display string; a missing or
    /// unrecognized category label falls back to [`Category::Other`].
    #[must_use]
    pub fn from_raw(category: Option<&str>, text: Option<&str>) -> Self {
        Self {
            category: category.map(Category::from_label).unwrap_or_default(),
            text: text.unwrap_or_default().to_string(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Category::Success, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(Category::Danger, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Category::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Category::Warning, text)
    }
}

/// Ordered collection of messages waiting to be presented.
///
/// Producers push in the order events happen; the presentation step drains
/// in that same order.
#[derive(Debug, Default)]
pub struct FlashBoard {
    messages: VecDeque<FlashMessage>,
}

impl FlashBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the board.
    pub fn push(&mut self, message: FlashMessage) {
        self.messages.push_back(message);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes and returns all messages in push order.
    pub fn take_all(&mut self) -> Vec<FlashMessage> {
        self.messages.drain(..).collect()
    }
}
