use super::entry::{EntryId, TranscriptEntry};

/// Append-only transcript of user messages and streamed bot replies.
///
/// Entries are addressed by `EntryId` handles so overlapping reply streams
/// each write into their own entry and can never corrupt another stream's
/// text. The view always follows the bottom, so the newest appended content
/// stays visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriptState {
    entries: Vec<TranscriptEntry>,
}

impl TranscriptState {
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a completed user entry.
    pub fn push_user(&mut self, text: impl Into<String>) -> EntryId {
        self.push(TranscriptEntry::user(text))
    }

    /// Appends an empty bot placeholder and returns its handle.
    pub fn begin_reply(&mut self) -> EntryId {
        self.push(TranscriptEntry::bot_placeholder())
    }

    /// Appends decoded chunk text to an in-progress reply entry.
    ///
    /// Returns false if the handle does not resolve to an entry.
    pub fn append_chunk(&mut self, id: EntryId, text: &str) -> bool {
        match self.entries.get_mut(id.0) {
            Some(entry) => {
                entry.text.push_str(text);
                true
            }
            None => false,
        }
    }

    /// Records a stream failure on a reply entry, keeping the text received
    /// so far. Returns false if the handle does not resolve.
    pub fn fail_reply(&mut self, id: EntryId, description: impl Into<String>) -> bool {
        match self.entries.get_mut(id.0) {
            Some(entry) => {
                entry.error = Some(description.into());
                true
            }
            None => false,
        }
    }

    #[allow(dead_code)]
    pub fn entry(&self, id: EntryId) -> Option<&TranscriptEntry> {
        self.entries.get(id.0)
    }

    fn push(&mut self, entry: TranscriptEntry) -> EntryId {
        self.entries.push(entry);
        EntryId(self.entries.len() - 1)
    }
}
