//! Use case for submitting the composed message and starting its reply
//! stream.

use crate::domain::{entry::EntryId, shell_state::ShellState};

use super::contracts::ReplyStreamer;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// A reply stream was started for this bot entry.
    Started(EntryId),
    /// Empty or whitespace-only input; nothing was appended or sent.
    Ignored,
    /// The input or transcript slot is absent; sending is inactive.
    SlotAbsent,
}

/// Submits the current input field content.
///
/// On a non-empty trimmed message this appends one user entry holding the
/// literal trimmed text, clears the input, appends one empty bot placeholder,
/// and starts the reply stream, all before any network activity resolves.
/// Whitespace-only input is a silent no-op.
pub fn submit(state: &mut ShellState, streamer: &mut dyn ReplyStreamer) -> SendOutcome {
    if state.input().is_none() || state.transcript().is_none() {
        return SendOutcome::SlotAbsent;
    }

    let Some(message) = state.input_mut().and_then(|input| input.take_trimmed()) else {
        return SendOutcome::Ignored;
    };

    let Some(transcript) = state.transcript_mut() else {
        return SendOutcome::SlotAbsent;
    };

    transcript.push_user(message.clone());
    let entry = transcript.begin_reply();
    streamer.start_reply(entry, message);

    tracing::debug!(entry = entry.index(), "reply stream started");
    SendOutcome::Started(entry)
}
