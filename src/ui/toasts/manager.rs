// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` receives submissions through [`ToastSink`], limits how many
//! cards are on screen, runs countdown and fade timers on each tick, and
//! promotes queued submissions when a slot frees up.

use super::entry::{ToastEntry, ToastId};
use crate::flash::{ToastRequest, ToastSink};
use std::collections::VecDeque;

/// Maximum number of toasts visible at once.
const MAX_VISIBLE: usize = 4;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Pointer entered or left a toast card.
    HoverChanged(ToastId, bool),
    /// Tick for advancing countdown and fade timers.
    Tick,
}

/// Manages queued submissions and visible toasts.
///
/// Visible toasts keep submission order: the oldest sits at the front and
/// renders at the top of the stack. A submission arriving while all slots
/// are taken waits in the queue; its countdown starts when it is promoted,
/// not when it was submitted.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible toasts (oldest first).
    visible: VecDeque<ToastEntry>,
    /// Submissions waiting for a free slot.
    queue: VecDeque<ToastRequest>,
}

impl ToastSink for Manager {
    fn display(&mut self, request: ToastRequest) {
        self.push(request);
    }
}

impl Manager {
    /// Creates a new empty toast manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a submission for display.
    ///
    /// If fewer than `MAX_VISIBLE` toasts are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, request: ToastRequest) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(ToastEntry::new(request));
        } else {
            self.queue.push_back(request);
        }
    }

    /// Starts the exit fade of a visible toast.
    ///
    /// Returns `true` if the toast was found.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.visible.iter_mut().find(|entry| entry.id() == id) {
            Some(entry) => {
                entry.begin_exit();
                true
            }
            None => false,
        }
    }

    /// Records a hover change on a visible toast.
    pub fn set_hovered(&mut self, id: ToastId, hovered: bool) {
        if let Some(entry) = self.visible.iter_mut().find(|entry| entry.id() == id) {
            entry.set_hovered(hovered);
        }
    }

    /// Processes a tick event.
    ///
    /// Expired toasts start their exit fade, finished fades are removed, and
    /// queued submissions fill any freed slots. Should be called periodically
    /// (e.g., every 100ms) while toasts are present.
    pub fn tick(&mut self) {
        for entry in &mut self.visible {
            if entry.is_expired() {
                entry.begin_exit();
            }
        }

        self.visible.retain(|entry| !entry.exit_finished());
        self.promote_from_queue();
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::HoverChanged(id, hovered) => {
                self.set_hovered(*id, *hovered);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &ToastEntry> {
        self.visible.iter()
    }

    /// Returns the number of visible toasts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued submissions.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any toasts (visible or queued).
    ///
    /// Drives the tick subscription: no toasts, no timer.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops all toasts and queued submissions without fades.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes queued submissions into free visible slots.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(request) = self.queue.pop_front() {
                self.visible.push_back(ToastEntry::new(request));
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::{Category, FlashMessage};
    use std::time::Duration;

    fn request(text: &str) -> ToastRequest {
        ToastRequest::from(FlashMessage::new(Category::Info, text))
    }

    fn expired_request(text: &str) -> ToastRequest {
        let mut request = request(text);
        request.options.duration = Duration::ZERO;
        request
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn display_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        manager.display(request("test"));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.has_toasts());
    }

    #[test]
    fn display_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE {
            manager.display(request(&format!("test-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.display(request("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn visible_toasts_keep_submission_order() {
        let mut manager = Manager::new();
        manager.display(request("first"));
        manager.display(request("second"));
        manager.display(request("third"));

        let texts: Vec<&str> = manager
            .visible()
            .map(|entry| entry.content().text.as_str())
            .collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn dismiss_starts_exit_instead_of_removing() {
        let mut manager = Manager::new();
        manager.display(request("test"));
        let id = manager.visible().next().unwrap().id();

        assert!(manager.dismiss(id));
        // Entry stays visible while the exit fade runs
        assert_eq!(manager.visible_count(), 1);
        assert!(manager.visible().next().unwrap().is_exiting());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        manager.display(request("test"));
        let fake_id = ToastEntry::new(request("temp")).id();

        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_expires_and_promotes_in_one_pass() {
        let mut manager = Manager::new();

        // Fill visible with instantly-expiring, instantly-removable toasts
        for i in 0..MAX_VISIBLE {
            let mut request = expired_request(&format!("old-{i}"));
            request.options.animation = crate::flash::AnimationPair {
                enter: "none",
                exit: "none",
            };
            manager.display(request);
        }
        manager.display(request("waiting"));
        assert_eq!(manager.queued_count(), 1);

        // First tick marks everything expired; exits are instant, so the
        // second tick removes them and promotes the queued submission.
        manager.tick();
        manager.tick();

        assert_eq!(manager.queued_count(), 0);
        let texts: Vec<&str> = manager
            .visible()
            .map(|entry| entry.content().text.as_str())
            .collect();
        assert_eq!(texts, ["waiting"]);
    }

    #[test]
    fn tick_keeps_fresh_toasts() {
        let mut manager = Manager::new();
        manager.display(request("fresh"));

        manager.tick();
        assert_eq!(manager.visible_count(), 1);
        assert!(!manager.visible().next().unwrap().is_exiting());
    }

    #[test]
    fn hover_message_pauses_the_entry() {
        let mut manager = Manager::new();
        manager.display(request("test"));
        let id = manager.visible().next().unwrap().id();

        manager.handle_message(&Message::HoverChanged(id, true));
        assert!(manager.visible().next().unwrap().is_hovered());

        manager.handle_message(&Message::HoverChanged(id, false));
        assert!(!manager.visible().next().unwrap().is_hovered());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        manager.display(request("test"));
        let id = manager.visible().next().unwrap().id();

        manager.handle_message(&Message::Dismiss(id));
        assert!(manager.visible().next().unwrap().is_exiting());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..6 {
            manager.display(request(&format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn queued_countdown_starts_at_promotion() {
        let mut manager = Manager::new();

        // Fill visible with toasts that expire and vanish on the next ticks
        for i in 0..MAX_VISIBLE {
            let mut request = expired_request(&format!("old-{i}"));
            request.options.animation = crate::flash::AnimationPair {
                enter: "none",
                exit: "none",
            };
            manager.display(request);
        }

        let mut queued = request("late");
        queued.options.duration = Duration::from_millis(300);
        manager.display(queued);

        // Longer than the queued duration: a clock started at submission
        // would already have run out
        std::thread::sleep(Duration::from_millis(350));
        manager.tick();
        manager.tick();

        let promoted = manager.visible().next().unwrap();
        assert_eq!(promoted.content().text, "late");
        assert!(
            !promoted.is_expired(),
            "queued toast countdown must start when it becomes visible"
        );
    }
}
