//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Style for the "You:" label before user messages.
pub fn user_label_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for the "Bot:" label before streamed replies.
pub fn bot_label_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Style for message body text.
pub fn entry_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the inline error notice on a failed reply.
pub fn error_notice_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Style for the flash message banner.
pub fn flash_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for navigation panel items.
pub fn nav_item_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the input prompt symbol.
pub fn input_prompt_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for typed input text.
pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for the input placeholder.
pub fn input_placeholder_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
}

/// Style for the status line key hints.
pub fn status_hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for panel borders.
pub fn panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
