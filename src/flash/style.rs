// SPDX-License-Identifier: MPL-2.0
//! Category-to-style mapping for flash toasts.
//!
//! Each category maps to an icon glyph and a left-to-right two-stop
//! gradient. The mapping is total: the match below is exhaustive and
//! [`Category::Other`] carries the neutral fallback, so no message ever
//! renders unstyled.

use super::category::Category;
use crate::ui::design_tokens::palette;
use iced::{gradient, Background, Color, Degrees};

/// Visual style for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashStyle {
    /// Icon glyph shown before the text. `None` for the fallback style.
    pub icon: Option<&'static str>,
    pub gradient_start: Color,
    pub gradient_end: Color,
}

impl FlashStyle {
    /// Returns the style for a category.
    #[must_use]
    pub fn of(category: Category) -> Self {
        match category {
            Category::Success => Self {
                icon: Some("✅"),
                gradient_start: palette::SUCCESS_300,
                gradient_end: palette::SUCCESS_400,
            },
            Category::Danger => Self {
                icon: Some("❌"),
                gradient_start: palette::ERROR_300,
                gradient_end: palette::ERROR_400,
            },
            Category::Info => Self {
                icon: Some("ℹ️"),
                gradient_start: palette::INFO_300,
                gradient_end: palette::INFO_400,
            },
            Category::Warning => Self {
                icon: Some("⚠️"),
                gradient_start: palette::WARNING_300,
                gradient_end: palette::WARNING_400,
            },
            Category::Other => Self {
                icon: None,
                gradient_start: palette::GRAY_500,
                gradient_end: palette::GRAY_600,
            },
        }
    }

    /// Builds the iced background for the gradient pair.
    #[must_use]
    pub fn background(&self) -> Background {
        let gradient = gradient::Linear::new(Degrees(90.0))
            .add_stop(0.0, self.gradient_start)
            .add_stop(1.0, self.gradient_end);

        Background::Gradient(gradient.into())
    }
}
