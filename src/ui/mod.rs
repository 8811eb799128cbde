// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`login`] - Credential form shown to signed-out users
//! - [`dashboard`] - Landing screen after login with session details
//! - [`users`] - Account administration for admins
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (password field)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`toasts`] - Transient notification cards for user feedback

pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod login;
pub mod theming;
pub mod toasts;
pub mod users;
