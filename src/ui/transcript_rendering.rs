//! Transcript rendering logic.
//!
//! Rows are pre-wrapped to the viewport width so the view can pin the scroll
//! position to the newest content with exact arithmetic: the guarantee is
//! that after every appended chunk the bottom row stays visible.

use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::entry::{EntryRole, TranscriptEntry};

use super::styles;

/// Builds display rows for the transcript, wrapped to `width` columns.
pub fn build_transcript_rows(entries: &[TranscriptEntry], width: u16) -> Vec<Line<'static>> {
    let width = (width.max(1)) as usize;
    let mut rows = Vec::new();
    for entry in entries {
        entry_rows(entry, width, &mut rows);
    }
    rows
}

/// Scroll offset that keeps the bottom row visible.
pub fn bottom_scroll_offset(total_rows: usize, viewport_rows: u16) -> u16 {
    total_rows
        .saturating_sub(viewport_rows as usize)
        .min(u16::MAX as usize) as u16
}

fn entry_rows(entry: &TranscriptEntry, width: usize, rows: &mut Vec<Line<'static>>) {
    let label = entry.role.display_label();
    let label_style = match entry.role {
        EntryRole::User => styles::user_label_style(),
        EntryRole::Bot => styles::bot_label_style(),
    };

    let first_width = width.saturating_sub(UnicodeWidthStr::width(label) + 1).max(1);
    let pieces = wrap_with_first_width(&entry.text, first_width, width);

    for (index, piece) in pieces.into_iter().enumerate() {
        if index == 0 {
            rows.push(Line::from(vec![
                Span::styled(label.to_owned(), label_style),
                Span::raw(" "),
                Span::styled(piece, styles::entry_text_style()),
            ]));
        } else {
            rows.push(Line::from(Span::styled(
                piece,
                styles::entry_text_style(),
            )));
        }
    }

    if let Some(description) = &entry.error {
        let notice = format!("Error: {description}");
        for piece in wrap_with_first_width(&notice, width, width) {
            rows.push(Line::from(Span::styled(
                piece,
                styles::error_notice_style(),
            )));
        }
    }
}

/// Wraps text by display width, honoring embedded newlines. The first row
/// may have a smaller capacity to make room for the entry label.
fn wrap_with_first_width(text: &str, first_width: usize, rest_width: usize) -> Vec<String> {
    let mut rows = vec![String::new()];
    let mut capacity = first_width.max(1);
    let mut used = 0;

    for ch in text.chars() {
        if ch == '\n' {
            rows.push(String::new());
            capacity = rest_width.max(1);
            used = 0;
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + char_width > capacity {
            rows.push(String::new());
            capacity = rest_width.max(1);
            used = 0;
        }

        if let Some(row) = rows.last_mut() {
            row.push(ch);
        }
        used += char_width;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn user_entry_renders_label_and_text_on_one_row() {
        let entries = [TranscriptEntry::user("hello")];

        let rows = build_transcript_rows(&entries, 40);

        assert_eq!(rows.len(), 1);
        assert_eq!(row_text(&rows[0]), "You: hello");
    }

    #[test]
    fn empty_bot_placeholder_still_occupies_a_row() {
        let entries = [TranscriptEntry::bot_placeholder()];

        let rows = build_transcript_rows(&entries, 40);

        assert_eq!(rows.len(), 1);
        assert_eq!(row_text(&rows[0]), "Bot: ");
    }

    #[test]
    fn long_text_wraps_at_display_width() {
        let entries = [TranscriptEntry::user("abcdefghij")];

        // "You: " leaves 5 columns on the first row of a 10-column view.
        let rows = build_transcript_rows(&entries, 10);

        assert_eq!(row_text(&rows[0]), "You: abcde");
        assert_eq!(row_text(&rows[1]), "fghij");
    }

    #[test]
    fn embedded_newlines_start_new_rows() {
        let entries = [TranscriptEntry::user("one\ntwo")];

        let rows = build_transcript_rows(&entries, 40);

        assert_eq!(rows.len(), 2);
        assert_eq!(row_text(&rows[0]), "You: one");
        assert_eq!(row_text(&rows[1]), "two");
    }

    #[test]
    fn failed_reply_appends_distinguished_error_notice() {
        let mut entry = TranscriptEntry::bot_placeholder();
        entry.text = "partial".to_owned();
        entry.error = Some("connection reset".to_owned());

        let rows = build_transcript_rows(&[entry], 60);

        assert_eq!(rows.len(), 2);
        assert_eq!(row_text(&rows[0]), "Bot: partial");
        assert_eq!(row_text(&rows[1]), "Error: connection reset");
        assert_eq!(rows[1].spans[0].style, styles::error_notice_style());
    }

    #[test]
    fn wide_characters_count_double_when_wrapping() {
        let entries = [TranscriptEntry::user("字字字")];

        // First row capacity after "You: " is 4 columns; each char is 2 wide.
        let rows = build_transcript_rows(&entries, 9);

        assert_eq!(row_text(&rows[0]), "You: 字字");
        assert_eq!(row_text(&rows[1]), "字");
    }

    #[test]
    fn bottom_offset_pins_newest_row_into_view() {
        assert_eq!(bottom_scroll_offset(100, 20), 80);
        assert_eq!(bottom_scroll_offset(5, 20), 0);
        assert_eq!(bottom_scroll_offset(0, 20), 0);
    }
}
