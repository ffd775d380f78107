use anyhow::Result;

use crate::domain::{entry::EntryId, events::AppEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Starts an asynchronous reply stream for a submitted message.
///
/// Progress arrives later as reply events tagged with the entry handle.
pub trait ReplyStreamer {
    fn start_reply(&mut self, entry: EntryId, message: String);
}

/// Performs the logout navigation against the server.
pub trait LogoutNavigator {
    fn navigate_logout(&self) -> Result<()>;
}
