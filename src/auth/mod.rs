// SPDX-License-Identifier: MPL-2.0
//! Account storage and credential verification.
//!
//! Accounts live in a CBOR registry on disk ([`registry::UserRegistry`]) and
//! carry a salted password digest ([`password::PasswordHash`]) instead of the
//! password itself. A successful sign-in produces a [`Session`] held in memory
//! for the lifetime of the window.

pub mod password;
pub mod registry;

pub use password::PasswordHash;
pub use registry::{UserRecord, UserRegistry};

use serde::{Deserialize, Serialize};

/// Access level attached to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Translation key for the role label shown in user lists.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Role::Admin => "users-role-admin",
            Role::User => "users-role-user",
        }
    }
}

/// An authenticated account for the lifetime of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
