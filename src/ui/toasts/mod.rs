// SPDX-License-Identifier: MPL-2.0
//! Toast display facility for flash messages.
//!
//! This module renders [`ToastRequest`]s submitted through the
//! [`ToastSink`] trait as transient cards stacked over the active screen.
//! It owns the part the flash pipeline stays agnostic about: visible-slot
//! limits, countdown and hover-pause timing, enter/exit fades, and the
//! actual widgets.
//!
//! # Components
//!
//! - [`entry`] - Per-toast runtime record with countdown and fade state
//! - [`manager`] - `Manager` for queuing and lifecycle, the app's `ToastSink`
//! - [`toast`] - Toast widget component for rendering entries
//!
//! # Usage
//!
//! ```ignore
//! use crate::flash::present;
//! use crate::ui::toasts;
//!
//! let mut manager = toasts::Manager::new();
//! present(board.as_mut(), &mut manager);
//!
//! // In your view function, render the overlay
//! let overlay = toasts::Toast::view_overlay(&manager).map(Message::Toast);
//! ```
//!
//! [`ToastRequest`]: crate::flash::ToastRequest
//! [`ToastSink`]: crate::flash::ToastSink

mod entry;
mod manager;
mod toast;

pub use entry::{ToastEntry, ToastId};
pub use manager::{Manager, Message};
pub use toast::Toast;
