// SPDX-License-Identifier: MPL-2.0
//! Per-toast runtime record.
//!
//! A [`ToastEntry`] wraps one displayed [`ToastRequest`] with everything the
//! manager needs to run its lifecycle: a unique id, the countdown clock,
//! accumulated hover pauses, and the exit-fade timestamp.

use crate::flash::notifier::{FLASH_ENTER_ANIMATION, FLASH_EXIT_ANIMATION};
use crate::flash::{AnimationPair, ToastContent, ToastOptions, ToastRequest};
use std::time::{Duration, Instant};

/// Length of the enter and exit fades for the named flash animations.
const FADE: Duration = Duration::from_millis(200);

/// Unique identifier for a displayed toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// One toast being displayed.
///
/// The countdown runs on wall-clock time minus the spans where the pointer
/// rested on the card (when the request asks for pause-on-hover). Expiry
/// starts the exit fade; the entry is removed once the fade completes.
#[derive(Debug)]
pub struct ToastEntry {
    id: ToastId,
    request: ToastRequest,
    displayed_at: Instant,
    paused_total: Duration,
    hovered_since: Option<Instant>,
    exit_started: Option<Instant>,
}

impl ToastEntry {
    /// Starts the lifecycle of a submitted request. The countdown begins now.
    #[must_use]
    pub fn new(request: ToastRequest) -> Self {
        Self {
            id: ToastId::new(),
            request,
            displayed_at: Instant::now(),
            paused_total: Duration::ZERO,
            hovered_since: None,
            exit_started: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.request.content
    }

    #[must_use]
    pub fn options(&self) -> &ToastOptions {
        &self.request.options
    }

    /// Records the pointer entering or leaving the card.
    ///
    /// While hovered, the countdown is frozen. Does nothing when the request
    /// did not ask for pause-on-hover.
    pub fn set_hovered(&mut self, hovered: bool) {
        if !self.request.options.pause_on_hover {
            return;
        }
        match (hovered, self.hovered_since) {
            (true, None) => self.hovered_since = Some(Instant::now()),
            (false, Some(since)) => {
                self.paused_total += since.elapsed();
                self.hovered_since = None;
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered_since.is_some()
    }

    /// Time the toast has been counting down, excluding hover pauses.
    #[must_use]
    pub fn effective_age(&self) -> Duration {
        let paused = self.paused_total
            + self
                .hovered_since
                .map_or(Duration::ZERO, |since| since.elapsed());
        self.displayed_at.elapsed().saturating_sub(paused)
    }

    /// Whether the countdown has run out and the exit fade should begin.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exit_started.is_none() && self.effective_age() >= self.request.options.duration
    }

    /// Starts the exit fade. Idempotent.
    pub fn begin_exit(&mut self) {
        if self.exit_started.is_none() {
            self.exit_started = Some(Instant::now());
        }
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.exit_started.is_some()
    }

    /// Whether the exit fade has completed and the entry can be dropped.
    #[must_use]
    pub fn exit_finished(&self) -> bool {
        match self.exit_started {
            Some(started) => started.elapsed() >= exit_fade(self.request.options.animation),
            None => false,
        }
    }

    /// Current opacity, driven by the enter and exit fades.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        if let Some(started) = self.exit_started {
            let fade = exit_fade(self.request.options.animation);
            if fade.is_zero() {
                return 0.0;
            }
            return (1.0 - started.elapsed().as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0);
        }

        let fade = enter_fade(self.request.options.animation);
        if fade.is_zero() {
            return 1.0;
        }
        (self.displayed_at.elapsed().as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Fade length for a named enter animation. Unknown names render instantly.
fn enter_fade(animation: AnimationPair) -> Duration {
    match animation.enter {
        FLASH_ENTER_ANIMATION => FADE,
        _ => Duration::ZERO,
    }
}

/// Fade length for a named exit animation. Unknown names remove instantly.
fn exit_fade(animation: AnimationPair) -> Duration {
    match animation.exit {
        FLASH_EXIT_ANIMATION => FADE,
        _ => Duration::ZERO,
    }
}
