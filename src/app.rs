use std::sync::mpsc;

use anyhow::Result;

use crate::{
    chat::HttpChatAdapter,
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;
    let _log_guard = infra::logging::init(&context.config.logging)?;

    tracing::debug!(
        ui = ui::module_name(),
        domain = domain::module_name(),
        chat = crate::chat::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Run => {
            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                &mut shell.input_source,
                &mut shell.reply_source,
                &mut shell.orchestrator,
            )?;
        }
        Command::Logout => {
            // The adapter needs an event channel even though logout streams
            // nothing back.
            let (events_tx, _events_rx) = mpsc::channel();
            let adapter = HttpChatAdapter::new(
                context.runtime.handle().clone(),
                context.client.clone(),
                events_tx,
            );

            let outcome = usecases::logout::logout(&adapter);
            println!("{}", logout_completion_line(outcome.server_notified));
        }
    }

    Ok(())
}

fn logout_completion_line(server_notified: bool) -> String {
    if server_notified {
        "Logout completed.".to_owned()
    } else {
        "Logout completed locally; the server could not be reached.".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_line_reports_server_acknowledgment() {
        assert_eq!(logout_completion_line(true), "Logout completed.");
    }

    #[test]
    fn logout_line_notes_unreachable_server() {
        let line = logout_completion_line(false);

        assert!(line.contains("could not be reached"));
    }
}
