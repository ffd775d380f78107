/// State for the collapsible navigation panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavPanelState {
    active: bool,
}

impl NavPanelState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the panel between collapsed and expanded.
    pub fn toggle(&mut self) {
        self.active = !self.active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_collapsed() {
        let state = NavPanelState::default();

        assert!(!state.is_active());
    }

    #[test]
    fn toggle_expands_then_collapses() {
        let mut state = NavPanelState::default();

        state.toggle();
        assert!(state.is_active());

        state.toggle();
        assert!(!state.is_active());
    }

    #[test]
    fn toggle_pair_restores_original_state() {
        let mut state = NavPanelState::default();
        state.toggle();
        let original = state.clone();

        state.toggle();
        state.toggle();

        assert_eq!(state, original);
    }
}
