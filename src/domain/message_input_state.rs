/// Upper bound on composed message length, in characters.
const MAX_INPUT_LENGTH: usize = 4096;

/// Composition state for the message input field.
///
/// The cursor is addressed by character index, not byte offset, so editing
/// stays safe on multi-byte text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageInputState {
    text: String,
    cursor: usize,
}

impl MessageInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts at the cursor. Returns false when the field is at capacity.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.char_count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Backspace: removes the character before the cursor.
    pub fn delete_char_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.remove_char_at_cursor();
    }

    /// Delete key: removes the character under the cursor.
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.char_count() {
            self.remove_char_at_cursor();
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Drains the input, returning its content trimmed of surrounding
    /// whitespace. Whitespace-only input yields None and is left untouched.
    pub fn take_trimmed(&mut self) -> Option<String> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let message = trimmed.to_owned();
        self.clear();
        Some(message)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(at, _)| at)
            .unwrap_or(self.text.len())
    }

    fn remove_char_at_cursor(&mut self) {
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.drain(start..end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> MessageInputState {
        let mut state = MessageInputState::default();
        for ch in text.chars() {
            state.insert_char(ch);
        }
        state
    }

    #[test]
    fn starts_empty_with_cursor_at_origin() {
        let state = MessageInputState::default();

        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn typing_advances_the_cursor() {
        let state = typed("Hi");

        assert_eq!(state.text(), "Hi");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn inserts_at_the_cursor_not_at_the_end() {
        let mut state = typed("Ho");
        state.move_cursor_left();

        state.insert_char('i');

        assert_eq!(state.text(), "Hio");
        assert_eq!(state.cursor_position(), 2);
    }

    #[test]
    fn backspace_removes_the_previous_character() {
        let mut state = typed("Hi");

        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 1);
    }

    #[test]
    fn backspace_at_origin_is_a_no_op() {
        let mut state = typed("H");
        state.move_cursor_home();

        state.delete_char_before();

        assert_eq!(state.text(), "H");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn delete_removes_the_character_under_the_cursor() {
        let mut state = typed("Hi");
        state.move_cursor_home();

        state.delete_char_at();

        assert_eq!(state.text(), "i");
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn delete_past_the_end_is_a_no_op() {
        let mut state = typed("H");

        state.delete_char_at();

        assert_eq!(state.text(), "H");
    }

    #[test]
    fn cursor_movement_clamps_to_text_bounds() {
        let mut state = typed("abc");

        for _ in 0..5 {
            state.move_cursor_left();
        }
        assert_eq!(state.cursor_position(), 0);

        state.move_cursor_end();
        state.move_cursor_right();
        assert_eq!(state.cursor_position(), 3);
    }

    #[test]
    fn take_trimmed_drains_and_trims() {
        let mut state = typed("  hello world  ");

        assert_eq!(state.take_trimmed(), Some("hello world".to_owned()));
        assert!(state.is_empty());
        assert_eq!(state.cursor_position(), 0);
    }

    #[test]
    fn take_trimmed_on_whitespace_only_keeps_the_input() {
        let mut state = typed("   \t ");

        assert_eq!(state.take_trimmed(), None);
        assert_eq!(state.text(), "   \t ");
    }

    #[test]
    fn take_trimmed_on_empty_input_returns_none() {
        let mut state = MessageInputState::default();

        assert_eq!(state.take_trimmed(), None);
    }

    #[test]
    fn edits_multibyte_text_on_character_boundaries() {
        let mut state = typed("Привет");
        assert_eq!(state.cursor_position(), 6);

        state.delete_char_before();
        assert_eq!(state.text(), "Приве");

        state.move_cursor_home();
        state.delete_char_at();
        assert_eq!(state.text(), "риве");
    }

    #[test]
    fn rejects_input_past_the_length_cap() {
        let mut state = MessageInputState::default();
        for _ in 0..MAX_INPUT_LENGTH {
            assert!(state.insert_char('x'));
        }

        assert!(!state.insert_char('y'));
        assert_eq!(state.text().chars().count(), MAX_INPUT_LENGTH);
    }
}
