// SPDX-License-Identifier: MPL-2.0
//! Flash-message core.
//!
//! Every user-visible outcome in the application is a flash message: a
//! `(category, text)` descriptor pushed onto a [`FlashBoard`] and later
//! turned into a toast submission by [`present`]. The pipeline is
//! deliberately one-way and stateless:
//!
//! 1. Producers (screens, loaders, the startup handoff) push
//!    [`FlashMessage`]s onto the board in event order.
//! 2. [`present`] drains the board and hands one [`ToastRequest`] per
//!    message to an injected [`ToastSink`].
//! 3. The sink owns everything after submission: stacking, timing,
//!    dismissal, animation.
//!
//! Message text is opaque throughout. It is composed (and localized) by the
//! producer and never parsed, interpreted, or used as a lookup key on its
//! way to the screen.

pub mod category;
pub mod handoff;
pub mod message;
pub mod notifier;
pub mod style;

pub use category::Category;
pub use message::{FlashBoard, FlashMessage};
pub use notifier::{
    present, AnimationPair, Placement, ToastContent, ToastOptions, ToastRequest, ToastSink,
};
pub use style::FlashStyle;
