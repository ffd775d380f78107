use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    input_source: &mut dyn AppEventSource,
    reply_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        base_url = %context.config.server.base_url,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;

        // Apply all queued reply events first so streamed chunks render in
        // delivery order before the next input poll.
        while let Some(event) = reply_source.next_event()? {
            orchestrator.handle_event(event)?;
        }

        if let Some(event) = input_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
