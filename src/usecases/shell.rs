use std::time::Instant;

use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    shell_state::ShellState,
};

use super::{
    contracts::{LogoutNavigator, ReplyStreamer, ShellOrchestrator},
    logout, send_message,
};

pub struct DefaultShellOrchestrator<S, N>
where
    S: ReplyStreamer,
    N: LogoutNavigator,
{
    state: ShellState,
    streamer: S,
    navigator: N,
}

impl<S, N> DefaultShellOrchestrator<S, N>
where
    S: ReplyStreamer,
    N: LogoutNavigator,
{
    pub fn new(state: ShellState, streamer: S, navigator: N) -> Self {
        Self {
            state,
            streamer,
            navigator,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                // Menu toggle: flips the navigation panel when the slot
                // exists, otherwise inactive.
                "b" => {
                    if let Some(nav_panel) = self.state.nav_panel_mut() {
                        nav_panel.toggle();
                    }
                }
                // Logout navigation: no confirmation, shell stops whether or
                // not the server acknowledged.
                "l" => {
                    let outcome = logout::logout(&self.navigator);
                    tracing::info!(server_notified = outcome.server_notified, "logged out");
                    self.state.stop();
                }
                _ => {}
            }
            return;
        }

        match key.key.as_str() {
            "enter" => {
                let outcome = send_message::submit(&mut self.state, &mut self.streamer);
                tracing::debug!(?outcome, "enter-to-send handled");
            }
            "backspace" => {
                if let Some(input) = self.state.input_mut() {
                    input.delete_char_before();
                }
            }
            "delete" => {
                if let Some(input) = self.state.input_mut() {
                    input.delete_char_at();
                }
            }
            "left" => {
                if let Some(input) = self.state.input_mut() {
                    input.move_cursor_left();
                }
            }
            "right" => {
                if let Some(input) = self.state.input_mut() {
                    input.move_cursor_right();
                }
            }
            "home" => {
                if let Some(input) = self.state.input_mut() {
                    input.move_cursor_home();
                }
            }
            "end" => {
                if let Some(input) = self.state.input_mut() {
                    input.move_cursor_end();
                }
            }
            key => {
                let mut chars = key.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    if let Some(input) = self.state.input_mut() {
                        input.insert_char(ch);
                    }
                }
            }
        }
    }
}

impl<S, N> ShellOrchestrator for DefaultShellOrchestrator<S, N>
where
    S: ReplyStreamer,
    N: LogoutNavigator,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {
                if self.state.tick(Instant::now()) {
                    tracing::debug!("flash message hidden");
                }
            }
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::ReplyChunk { entry, text } => {
                if let Some(transcript) = self.state.transcript_mut() {
                    if !transcript.append_chunk(entry, &text) {
                        tracing::warn!(
                            entry = entry.index(),
                            "chunk for unknown transcript entry dropped"
                        );
                    }
                }
            }
            AppEvent::ReplyFinished { entry } => {
                tracing::debug!(entry = entry.index(), "reply stream finished");
            }
            AppEvent::ReplyFailed { entry, reason } => {
                if let Some(transcript) = self.state.transcript_mut() {
                    if !transcript.fail_reply(entry, reason.clone()) {
                        tracing::warn!(
                            entry = entry.index(),
                            "failure notice for unknown transcript entry dropped"
                        );
                    }
                }
                tracing::warn!(entry = entry.index(), reason = %reason, "reply stream failed");
            }
        }

        Ok(())
    }
}
