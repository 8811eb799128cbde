// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::dashboard;
use crate::ui::login;
use crate::ui::toasts;
use crate::ui::users;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Login(login::Message),
    Dashboard(dashboard::Message),
    Users(users::Message),
    Toast(toasts::Message),
    Tick(Instant), // Periodic tick for toast expiry
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional path to a handoff document with pending notifications.
    /// Defaults to `flashes.toml` in the app data directory.
    pub handoff_path: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `ICED_FLASH_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for config.toml).
    /// Takes precedence over `ICED_FLASH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
