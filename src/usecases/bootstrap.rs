use std::{
    path::Path,
    sync::mpsc,
    time::{Duration, Instant},
};

use crate::{
    chat::{ChatClient, HttpChatAdapter},
    domain::{
        flash_state::FlashState,
        message_input_state::MessageInputState,
        nav_panel_state::NavPanelState,
        shell_state::{ShellSlots, ShellState},
        transcript_state::TranscriptState,
    },
    infra::{
        config::{self, UiConfig},
        error::AppError,
    },
    ui::{ChannelReplyEventSource, CrosstermEventSource},
};

use super::{context::AppContext, shell::DefaultShellOrchestrator};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = config::load(config_path)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::RuntimeInit)?;

    let client = ChatClient::new(&config.server.base_url)?;

    Ok(AppContext::new(config, runtime, client))
}

pub struct ComposedShell {
    pub input_source: CrosstermEventSource,
    pub reply_source: ChannelReplyEventSource,
    pub orchestrator: DefaultShellOrchestrator<HttpChatAdapter, HttpChatAdapter>,
}

/// Wires the event sources, chat adapter, and orchestrator together.
pub fn compose_shell(context: &AppContext) -> ComposedShell {
    let (events_tx, events_rx) = mpsc::channel();

    let adapter = HttpChatAdapter::new(
        context.runtime.handle().clone(),
        context.client.clone(),
        events_tx,
    );

    let state = ShellState::new(build_slots(&context.config.ui, Instant::now()));

    ComposedShell {
        input_source: CrosstermEventSource::default(),
        reply_source: ChannelReplyEventSource::new(events_rx),
        orchestrator: DefaultShellOrchestrator::new(state, adapter.clone(), adapter),
    }
}

/// Decides slot presence from configuration.
fn build_slots(ui: &UiConfig, now: Instant) -> ShellSlots {
    ShellSlots {
        input: ui.input.then(MessageInputState::default),
        transcript: ui.transcript.then(TranscriptState::default),
        nav_panel: ui.nav_panel.then(NavPanelState::default),
        flash: ui.flash_message.as_ref().map(|message| {
            FlashState::new(
                message.clone(),
                Duration::from_millis(ui.flash_hide_after_ms),
                now,
            )
        }),
    }
}
