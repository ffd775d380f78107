use super::entry::EntryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    /// Decoded text arrived for an in-progress reply.
    ReplyChunk { entry: EntryId, text: String },
    /// The reply stream signalled end-of-stream.
    ReplyFinished { entry: EntryId },
    /// The reply handshake or stream read failed.
    ReplyFailed { entry: EntryId, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }
}
