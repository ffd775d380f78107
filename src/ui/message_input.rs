//! Message input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::message_input_state::MessageInputState;

use super::styles;

/// Placeholder text shown while the input is empty.
const PLACEHOLDER_TEXT: &str = "Type a message and press Enter...";

/// Prompt symbol shown before the input text.
const PROMPT_SYMBOL: &str = "> ";

/// Renders the message input field and places the cursor.
pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input_state: &MessageInputState) {
    let line = build_input_line(input_state);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );

    frame.render_widget(paragraph, area);

    // Saturating arithmetic keeps very long inputs from overflowing.
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.len() as u16)
        .saturating_add(input_state.cursor_position().min(u16::MAX as usize) as u16);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

fn build_input_line(input_state: &MessageInputState) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input_state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(
                PLACEHOLDER_TEXT.to_owned(),
                styles::input_placeholder_style(),
            ),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input_state.text().to_owned(), styles::input_text_style()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn empty_input_shows_placeholder() {
        let state = MessageInputState::default();

        let line = build_input_line(&state);

        assert_eq!(line_text(&line), format!("> {PLACEHOLDER_TEXT}"));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let mut state = MessageInputState::default();
        state.insert_char('h');
        state.insert_char('i');

        let line = build_input_line(&state);

        assert_eq!(line_text(&line), "> hi");
    }
}
