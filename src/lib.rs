// SPDX-License-Identifier: MPL-2.0
//! `iced_flash` is a small authenticated desktop app built with the Iced GUI
//! framework.
//!
//! It demonstrates session-based access control, transient flash notifications
//! rendered as toasts, internationalization with Fluent, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_flash/0.2.0")]

pub mod app;
pub mod auth;
pub mod error;
pub mod flash;
pub mod i18n;
pub mod ui;
