// SPDX-License-Identifier: MPL-2.0
//! Startup handoff: descriptors an outer process leaves for the next run.
//!
//! The handoff file is a TOML document of `[[message]]` tables, each with
//! two optional string keys:
//!
//! ```toml
//! [[message]]
//! category = "success"
//! text = "Backup completed."
//! ```
//!
//! It is read once at startup. An absent file means there is nothing to
//! show and is not an error; missing keys degrade per the descriptor
//! rules instead of failing.

use super::message::{FlashBoard, FlashMessage};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default handoff file name within the app data directory.
pub const HANDOFF_FILE: &str = "flashes.toml";

#[derive(Debug, Default, Deserialize)]
struct HandoffDocument {
    #[serde(default, rename = "message")]
    messages: Vec<RawDescriptor>,
}

/// One descriptor as written by the outer process.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Reads the handoff document at `path`.
///
/// Returns `Ok(None)` when no file exists, otherwise `Ok(Some(board))`
/// with the descriptors in document order.
pub fn load(path: &Path) -> Result<Option<FlashBoard>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let document: HandoffDocument =
        toml::from_str(&content).map_err(|e| Error::Handoff(e.to_string()))?;

    let mut board = FlashBoard::new();
    for descriptor in document.messages {
        board.push(FlashMessage::from_raw(
            descriptor.category.as_deref(),
            descriptor.text.as_deref(),
        ));
    }

    Ok(Some(board))
}

/// Reads and removes the handoff document, so its descriptors show once.
///
/// Removal is best-effort; a file that cannot be deleted is left in place.
pub fn consume(path: &Path) -> Result<Option<FlashBoard>> {
    let board = load(path)?;
    if board.is_some() {
        let _ = fs::remove_file(path);
    }
    Ok(board)
}
