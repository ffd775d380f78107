/// Stable handle to a transcript entry.
///
/// Entries are append-only, so the index never moves once issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    User,
    Bot,
}

impl EntryRole {
    /// Returns the display label shown before the entry text.
    pub fn display_label(&self) -> &'static str {
        match self {
            EntryRole::User => "You:",
            EntryRole::Bot => "Bot:",
        }
    }
}

/// One rendered entry in the transcript.
///
/// User entries are complete at append time. Bot entries start empty and
/// accumulate streamed text; a failed stream leaves the text received so far
/// plus an error notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: EntryRole,
    pub text: String,
    pub error: Option<String>,
}

impl TranscriptEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: EntryRole::User,
            text: text.into(),
            error: None,
        }
    }

    pub fn bot_placeholder() -> Self {
        Self {
            role: EntryRole::Bot,
            text: String::new(),
            error: None,
        }
    }

    /// Returns true if the entry carries a failure notice.
    #[allow(dead_code)]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_entry_holds_literal_text() {
        let entry = TranscriptEntry::user("hello there");

        assert_eq!(entry.role, EntryRole::User);
        assert_eq!(entry.text, "hello there");
        assert!(!entry.is_failed());
    }

    #[test]
    fn bot_placeholder_starts_empty() {
        let entry = TranscriptEntry::bot_placeholder();

        assert_eq!(entry.role, EntryRole::Bot);
        assert_eq!(entry.text, "");
        assert_eq!(entry.error, None);
    }

    #[test]
    fn roles_have_distinct_labels() {
        assert_eq!(EntryRole::User.display_label(), "You:");
        assert_eq!(EntryRole::Bot.display_label(), "Bot:");
    }
}
