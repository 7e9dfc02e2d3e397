/// Auto-dismiss delay for toast notifications.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Single-slot notification. A new `show` replaces the current message and
/// bumps the generation, so a dismiss timer scheduled for an earlier message
/// can never hide a later one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    /// Displays `message`. `generation` identifies the dismiss timer the
    /// caller schedules alongside this call.
    pub fn show(&mut self, message: impl Into<String>, generation: u64) {
        self.message = Some(message.into());
        self.generation = generation;
    }

    /// Timer-driven dismiss. Ignored when a newer `show` has superseded the
    /// timer that fired.
    pub fn dismiss(&mut self, generation: u64) {
        if generation == self.generation {
            self.message = None;
        }
    }

    /// Explicit close. Safe to call when already hidden.
    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn visible(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_replaces_the_old_one() {
        let mut toast = ToastState::default();
        toast.show("A", 1);
        toast.show("B", 2);
        assert_eq!(toast.message(), Some("B"));
    }

    #[test]
    fn stale_dismiss_does_not_hide_a_newer_message() {
        let mut toast = ToastState::default();
        toast.show("A", 1);
        toast.show("B", 2);
        toast.dismiss(1);
        assert!(toast.visible(), "timer for A must not hide B");
        toast.dismiss(2);
        assert!(!toast.visible());
    }

    #[test]
    fn hide_is_idempotent() {
        let mut toast = ToastState::default();
        toast.hide();
        assert!(!toast.visible());
        toast.show("A", 1);
        toast.hide();
        toast.hide();
        assert!(!toast.visible());
    }

    #[test]
    fn dismiss_after_manual_close_and_new_show_is_ignored() {
        let mut toast = ToastState::default();
        toast.show("A", 1);
        toast.hide();
        toast.show("B", 2);
        toast.dismiss(1);
        assert_eq!(toast.message(), Some("B"));
    }
}
