// SPDX-License-Identifier: MPL-2.0
//! Toast submission types and the presentation step.
//!
//! [`present`] is the only path from pending messages to the screen. It
//! takes the board explicitly (or its absence) and an injected
//! [`ToastSink`], so the whole pipeline runs without any global state and
//! tests can observe submissions with a recording fake.

use super::message::{FlashBoard, FlashMessage};
use super::style::FlashStyle;
use iced::Background;
use std::time::Duration;

/// How long a flash toast stays on screen before auto-dismissing.
pub const FLASH_DURATION: Duration = Duration::from_millis(5000);

/// Chrome class applied to flash toast cards.
pub const FLASH_CARD_CLASS: &str = "flash-ribbon";

/// Named enter animation requested for flash toasts.
pub const FLASH_ENTER_ANIMATION: &str = "flash-slide-in";

/// Named exit animation requested for flash toasts.
pub const FLASH_EXIT_ANIMATION: &str = "flash-fade-out";

/// On-screen anchor for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Placement {
    /// Every anchor, for facilities that lay out one region per anchor.
    pub const ALL: [Placement; 6] = [
        Placement::TopLeft,
        Placement::TopCenter,
        Placement::TopRight,
        Placement::BottomLeft,
        Placement::BottomCenter,
        Placement::BottomRight,
    ];
}

/// Named enter/exit animation pair, resolved by the rendering facility.
///
/// Names the facility does not know resolve to no effect, never to an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPair {
    pub enter: &'static str,
    pub exit: &'static str,
}

/// Composite content of a toast: an optional icon glyph and opaque text.
///
/// The text is rendered as plain text, whatever it contains. Markup-like
/// input shows up literally on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub icon: Option<&'static str>,
    pub text: String,
}

/// Display options handed to the facility along with the content.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    /// Time on screen before auto-dismiss.
    pub duration: Duration,
    /// Whether the card shows a manual close button.
    pub closable: bool,
    pub placement: Placement,
    /// Whether hovering the card pauses the auto-dismiss clock.
    pub pause_on_hover: bool,
    pub background: Background,
    /// Padding the facility adds around the content. Flash cards own their
    /// own padding, so flash submissions request zero.
    pub padding: f32,
    pub class_name: &'static str,
    pub animation: AnimationPair,
}

impl ToastOptions {
    /// The fixed configuration used for every flash submission.
    #[must_use]
    pub fn flash(background: Background) -> Self {
        Self {
            duration: FLASH_DURATION,
            closable: true,
            placement: Placement::TopCenter,
            pause_on_hover: true,
            background,
            padding: 0.0,
            class_name: FLASH_CARD_CLASS,
            animation: AnimationPair {
                enter: FLASH_ENTER_ANIMATION,
                exit: FLASH_EXIT_ANIMATION,
            },
        }
    }
}

/// One display submission: what to show and how.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest {
    pub content: ToastContent,
    pub options: ToastOptions,
}

impl From<FlashMessage> for ToastRequest {
    fn from(message: FlashMessage) -> Self {
        let style = FlashStyle::of(message.category);

        Self {
            content: ToastContent {
                icon: style.icon,
                text: message.text,
            },
            options: ToastOptions::flash(style.background()),
        }
    }
}

/// Capability that puts submissions on screen.
///
/// The production implementation is the toast manager; tests substitute a
/// recording fake to observe what was submitted.
pub trait ToastSink {
    fn display(&mut self, request: ToastRequest);
}

/// Drains the board, if there is one, and submits one request per message
/// in board order.
///
/// An absent board is a silent no-op. Submissions are independent and
/// never batched; each message becomes its own independently-timed toast.
/// Returns the number of submissions made.
pub fn present(board: Option<&mut FlashBoard>, sink: &mut dyn ToastSink) -> usize {
    let Some(board) = board else {
        return 0;
    };

    let messages = board.take_all();
    let submitted = messages.len();
    for message in messages {
        sink.display(ToastRequest::from(message));
    }
    submitted
}
