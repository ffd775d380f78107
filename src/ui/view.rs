use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{
    flash_state::FlashState, nav_panel_state::NavPanelState, shell_state::ShellState,
    transcript_state::TranscriptState,
};

use super::message_input::render_message_input;
use super::styles;
use super::transcript_rendering::{bottom_scroll_offset, build_transcript_rows};

const NAV_PANEL_WIDTH: u16 = 22;
const STATUS_HINTS: &str = "Enter: send   Ctrl+B: menu   Ctrl+L: logout   Ctrl+C: quit";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let flash = state.flash().filter(|flash| flash.is_visible());

    let mut constraints = Vec::new();
    if flash.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(1));
    if state.input().is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());
    let mut regions = regions.iter().copied();

    if let Some(flash) = flash {
        if let Some(region) = regions.next() {
            render_flash_banner(frame, region, flash);
        }
    }

    if let Some(region) = regions.next() {
        render_content(frame, region, state);
    }

    if let Some(input) = state.input() {
        if let Some(region) = regions.next() {
            render_message_input(frame, region, input);
        }
    }

    if let Some(region) = regions.next() {
        let status = Paragraph::new(Span::styled(STATUS_HINTS, styles::status_hint_style()));
        frame.render_widget(status, region);
    }
}

fn render_content(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let nav_expanded = state.nav_panel().is_some_and(NavPanelState::is_active);

    let transcript_area = if nav_expanded {
        let [nav_area, rest] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_PANEL_WIDTH), Constraint::Min(1)])
            .areas(area);
        render_nav_panel(frame, nav_area);
        rest
    } else {
        area
    };

    render_transcript(frame, transcript_area, state.transcript());
}

fn render_nav_panel(frame: &mut Frame<'_>, area: Rect) {
    let items = ["Home", "Chat", "Logout  (Ctrl+L)"]
        .into_iter()
        .map(|label| ListItem::new(Span::styled(label, styles::nav_item_style())));

    let list = List::new(items).block(
        Block::default()
            .title("Menu")
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );
    frame.render_widget(list, area);
}

fn render_transcript(frame: &mut Frame<'_>, area: Rect, transcript: Option<&TranscriptState>) {
    let block = Block::default()
        .title("Chat")
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(transcript) = transcript else {
        return;
    };

    let rows = build_transcript_rows(transcript.entries(), inner.width);
    let offset = bottom_scroll_offset(rows.len(), inner.height);
    let paragraph = Paragraph::new(rows).scroll((offset, 0));
    frame.render_widget(paragraph, inner);
}

fn render_flash_banner(frame: &mut Frame<'_>, area: Rect, flash: &FlashState) {
    let banner = Paragraph::new(Span::raw(flash.message().to_owned()))
        .style(styles::flash_style());
    frame.render_widget(banner, area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::{
        message_input_state::MessageInputState,
        shell_state::ShellSlots,
    };

    fn rendered_text(state: &ShellState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal must build");
        terminal
            .draw(|frame| render(frame, state))
            .expect("render must succeed");

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn full_state() -> ShellState {
        let mut transcript = TranscriptState::default();
        transcript.push_user("hello there");
        let reply = transcript.begin_reply();
        transcript.append_chunk(reply, "hi yourself");

        ShellState::new(ShellSlots {
            input: Some(MessageInputState::default()),
            transcript: Some(transcript),
            nav_panel: Some(NavPanelState::default()),
            flash: Some(FlashState::new(
                "Logged in successfully.",
                Duration::from_millis(4000),
                Instant::now(),
            )),
        })
    }

    #[test]
    fn renders_transcript_entries_and_input() {
        let text = rendered_text(&full_state());

        assert!(text.contains("You: hello there"));
        assert!(text.contains("Bot: hi yourself"));
        assert!(text.contains("Type a message and press Enter..."));
    }

    #[test]
    fn renders_visible_flash_banner() {
        let text = rendered_text(&full_state());

        assert!(text.contains("Logged in successfully."));
    }

    #[test]
    fn hidden_flash_banner_is_not_rendered() {
        let mut state = full_state();
        state.tick(Instant::now() + Duration::from_millis(4001));

        let text = rendered_text(&state);

        assert!(!text.contains("Logged in successfully."));
    }

    #[test]
    fn nav_panel_appears_only_when_expanded() {
        let mut state = full_state();
        assert!(!rendered_text(&state).contains("Menu"));

        if let Some(nav_panel) = state.nav_panel_mut() {
            nav_panel.toggle();
        }

        assert!(rendered_text(&state).contains("Menu"));
    }

    #[test]
    fn renders_failed_reply_notice() {
        let mut transcript = TranscriptState::default();
        let reply = transcript.begin_reply();
        transcript.append_chunk(reply, "partial");
        transcript.fail_reply(reply, "connection reset");
        let state = ShellState::new(ShellSlots {
            transcript: Some(transcript),
            ..ShellSlots::default()
        });

        let text = rendered_text(&state);

        assert!(text.contains("Bot: partial"));
        assert!(text.contains("Error: connection reset"));
    }

    #[test]
    fn absent_slots_render_without_panicking() {
        let state = ShellState::default();

        let text = rendered_text(&state);

        assert!(text.contains("Chat"));
        assert!(!text.contains("Type a message"));
    }
}
