// SPDX-License-Identifier: MPL-2.0
//! Salted password hashing.
//!
//! Passwords are never stored. Each account keeps a random 32-byte salt and a
//! blake3 keyed-mode digest of the password under that salt. Equal passwords
//! on different accounts therefore produce unrelated digests.

use serde::{Deserialize, Serialize};

/// Salt plus keyed blake3 digest of one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash {
    salt: [u8; 32],
    digest: [u8; 32],
}

impl PasswordHash {
    /// Hashes a password under a fresh random salt.
    ///
    /// Uses `getrandom` for secure entropy from the operating system.
    ///
    /// # Panics
    ///
    /// Panics if the operating system fails to provide random bytes.
    /// This is extremely rare and typically indicates a critical system failure.
    #[must_use]
    pub fn new(password: &str) -> Self {
        let mut salt = [0u8; 32];
        // Use OS-provided cryptographic randomness
        getrandom::fill(&mut salt).expect("Failed to generate random salt");
        Self {
            digest: keyed_digest(&salt, password),
            salt,
        }
    }

    /// Checks a candidate password against the stored digest.
    ///
    /// The comparison goes through [`blake3::Hash`], which compares in
    /// constant time.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate_digest = keyed_digest(&self.salt, candidate);
        blake3::Hash::from_bytes(candidate_digest) == blake3::Hash::from_bytes(self.digest)
    }
}

fn keyed_digest(salt: &[u8; 32], password: &str) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new_keyed(salt);
    hasher.update(password.as_bytes());
    *hasher.finalize().as_bytes()
}
