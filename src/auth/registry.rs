// SPDX-License-Identifier: MPL-2.0
//! User account storage using CBOR format.
//!
//! The registry holds every known account with its role and salted password
//! digest. It lives in `users.cbor` inside the app data directory and is
//! rewritten in full after each mutation.
//!
//! A registry that cannot be read is replaced by one containing the default
//! `admin` account, so the application always has at least one way to sign in.
//!
//! # Path Resolution
//!
//! The registry file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `ICED_FLASH_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::password::PasswordHash;
use super::Role;
use crate::app::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Registry file name within the app data directory.
const REGISTRY_FILE: &str = "users.cbor";

/// Account seeded into an empty or unreadable registry.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// One stored account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub role: Role,
    password: PasswordHash,
}

/// All known accounts, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegistry {
    users: Vec<UserRecord>,
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::with_default_admin()
    }
}

impl UserRegistry {
    /// Builds a registry containing only the default `admin` account.
    #[must_use]
    pub fn with_default_admin() -> Self {
        let mut registry = Self { users: Vec::new() };
        registry.add(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD, Role::Admin);
        registry
    }

    /// Loads the registry from the default location.
    ///
    /// Returns a tuple of (registry, optional_warning). A missing file yields
    /// the default registry without a warning; an unreadable or corrupt file
    /// yields the default registry plus a warning key for the notification
    /// system.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the registry from a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path resolution.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::registry_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(registry) => (registry, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-registry-load-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-registry-load-error".to_string()),
            ),
        }
    }

    /// Saves the registry to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns an optional warning key if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the registry to a custom directory.
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Optional base directory. If `None`, uses default path resolution.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::registry_file_path_with_override(base_dir) else {
            return Some("notification-registry-save-error".to_string());
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-registry-save-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("notification-registry-save-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-registry-save-error".to_string()),
        }
    }

    /// Returns the full path to the registry file with optional override.
    fn registry_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(REGISTRY_FILE);
            path
        })
    }

    /// Checks a username/password pair against the stored accounts.
    ///
    /// Returns the account role on success. Usernames match exactly
    /// (case-sensitive).
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> Option<Role> {
        self.users
            .iter()
            .find(|user| user.username == username)
            .filter(|user| user.password.verify(password))
            .map(|user| user.role)
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|user| user.username == username)
    }

    /// Adds an account. Returns `false` when the username is already taken.
    pub fn add(&mut self, username: &str, password: &str, role: Role) -> bool {
        if self.contains(username) {
            return false;
        }
        self.users.push(UserRecord {
            username: username.to_string(),
            role,
            password: PasswordHash::new(password),
        });
        true
    }

    /// Removes an account. Returns `false` when no such username exists.
    pub fn remove(&mut self, username: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|user| user.username != username);
        self.users.len() < before
    }

    /// All accounts in insertion order, for the user list screen.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
