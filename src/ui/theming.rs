// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.
//!
//! Widgets take their colors from the active [`iced::Theme`] palette; this
//! module only decides which palette is active. `System` follows the desktop
//! preference via `dark-light` and falls back to dark when detection fails.

use serde::{Deserialize, Serialize};

/// Configuration de thème globale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}
