// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple screens.
//!
//! These components encapsulate common UI patterns that appear in different
//! parts of the application, promoting consistency and reducing duplication.
//!
//! # Components
//!
//! - [`password_input`] - Password field with a visibility toggle, used by
//!   the login form and the user administration form

pub mod password_input;
