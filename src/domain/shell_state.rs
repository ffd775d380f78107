use std::time::Instant;

use super::{
    flash_state::FlashState, message_input_state::MessageInputState,
    nav_panel_state::NavPanelState, transcript_state::TranscriptState,
};

/// The named UI slots the shell controller operates on.
///
/// Each slot is individually optional. A behavior whose slot is absent is
/// silently inactive; the controller branches on presence explicitly instead
/// of assuming ambient page structure.
#[derive(Debug, Default)]
pub struct ShellSlots {
    pub input: Option<MessageInputState>,
    pub transcript: Option<TranscriptState>,
    pub nav_panel: Option<NavPanelState>,
    pub flash: Option<FlashState>,
}

#[derive(Debug)]
pub struct ShellState {
    running: bool,
    input: Option<MessageInputState>,
    transcript: Option<TranscriptState>,
    nav_panel: Option<NavPanelState>,
    flash: Option<FlashState>,
}

impl ShellState {
    pub fn new(slots: ShellSlots) -> Self {
        Self {
            running: true,
            input: slots.input,
            transcript: slots.transcript,
            nav_panel: slots.nav_panel,
            flash: slots.flash,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn input(&self) -> Option<&MessageInputState> {
        self.input.as_ref()
    }

    pub fn input_mut(&mut self) -> Option<&mut MessageInputState> {
        self.input.as_mut()
    }

    pub fn transcript(&self) -> Option<&TranscriptState> {
        self.transcript.as_ref()
    }

    pub fn transcript_mut(&mut self) -> Option<&mut TranscriptState> {
        self.transcript.as_mut()
    }

    pub fn nav_panel(&self) -> Option<&NavPanelState> {
        self.nav_panel.as_ref()
    }

    pub fn nav_panel_mut(&mut self) -> Option<&mut NavPanelState> {
        self.nav_panel.as_mut()
    }

    pub fn flash(&self) -> Option<&FlashState> {
        self.flash.as_ref()
    }

    /// Advances time-driven state. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.flash.as_mut() {
            Some(flash) => flash.update(now),
            None => false,
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(ShellSlots::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn full_slots() -> ShellSlots {
        ShellSlots {
            input: Some(MessageInputState::default()),
            transcript: Some(TranscriptState::default()),
            nav_panel: Some(NavPanelState::default()),
            flash: Some(FlashState::new(
                "hello",
                Duration::from_millis(4000),
                Instant::now(),
            )),
        }
    }

    #[test]
    fn new_shell_is_running() {
        let state = ShellState::new(full_slots());

        assert!(state.is_running());
    }

    #[test]
    fn stop_halts_the_shell() {
        let mut state = ShellState::new(full_slots());

        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn absent_slots_read_as_none() {
        let state = ShellState::default();

        assert!(state.input().is_none());
        assert!(state.transcript().is_none());
        assert!(state.nav_panel().is_none());
        assert!(state.flash().is_none());
    }

    #[test]
    fn tick_without_flash_slot_reports_no_change() {
        let mut state = ShellState::default();

        assert!(!state.tick(Instant::now()));
    }

    #[test]
    fn tick_hides_flash_after_deadline() {
        let shown_at = Instant::now();
        let mut state = ShellState::new(ShellSlots {
            flash: Some(FlashState::new(
                "hi",
                Duration::from_millis(4000),
                shown_at,
            )),
            ..ShellSlots::default()
        });

        assert!(!state.tick(shown_at + Duration::from_millis(100)));
        assert!(state.flash().is_some_and(FlashState::is_visible));

        assert!(state.tick(shown_at + Duration::from_millis(4000)));
        assert!(!state.flash().is_some_and(FlashState::is_visible));
    }
}
