//! UI layer: terminal session, event sources, and rendering.

mod event_source;
mod message_input;
pub mod shell;
mod styles;
mod terminal;
mod transcript_rendering;
mod view;

pub(crate) use event_source::{ChannelReplyEventSource, CrosstermEventSource};

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
