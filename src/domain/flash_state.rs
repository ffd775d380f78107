use std::time::{Duration, Instant};

/// State for the one-shot flash message banner.
///
/// The banner is visible from shell start and hides exactly once when its
/// deadline passes, whether or not the user interacted with anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashState {
    message: String,
    deadline: Instant,
    visible: bool,
}

impl FlashState {
    pub fn new(message: impl Into<String>, hide_after: Duration, shown_at: Instant) -> Self {
        Self {
            message: message.into(),
            deadline: shown_at + hide_after,
            visible: true,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hides the banner once the deadline has passed. Returns true when this
    /// call performed the hide transition.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.visible && now >= self.deadline {
            self.visible = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_visible_before_deadline() {
        let shown_at = Instant::now();
        let mut flash = FlashState::new("Logged in", Duration::from_millis(4000), shown_at);

        assert!(flash.is_visible());
        assert!(!flash.update(shown_at + Duration::from_millis(3999)));
        assert!(flash.is_visible());
    }

    #[test]
    fn banner_hides_once_deadline_passes() {
        let shown_at = Instant::now();
        let mut flash = FlashState::new("Logged in", Duration::from_millis(4000), shown_at);

        assert!(flash.update(shown_at + Duration::from_millis(4000)));
        assert!(!flash.is_visible());
    }

    #[test]
    fn hide_transition_fires_only_once() {
        let shown_at = Instant::now();
        let mut flash = FlashState::new("Logged in", Duration::from_millis(10), shown_at);

        assert!(flash.update(shown_at + Duration::from_millis(20)));
        assert!(!flash.update(shown_at + Duration::from_millis(30)));
    }

    #[test]
    fn message_text_is_preserved() {
        let flash = FlashState::new("Welcome back", Duration::from_millis(1), Instant::now());

        assert_eq!(flash.message(), "Welcome back");
    }
}
