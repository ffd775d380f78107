use std::sync::mpsc::Sender;

use anyhow::Result;
use tokio::runtime::Handle;

use crate::{
    domain::{entry::EntryId, events::AppEvent},
    usecases::contracts::{LogoutNavigator, ReplyStreamer},
};

use super::{client::ChatClient, stream::pump_reply};

/// Bridges the async HTTP client into the synchronous shell loop.
///
/// Each send spawns one pump task on the shared runtime; the task reports
/// progress back over the event channel tagged with its entry handle, so
/// overlapping sends stay independent.
#[derive(Debug, Clone)]
pub struct HttpChatAdapter {
    runtime: Handle,
    client: ChatClient,
    events: Sender<AppEvent>,
}

impl HttpChatAdapter {
    pub fn new(runtime: Handle, client: ChatClient, events: Sender<AppEvent>) -> Self {
        Self {
            runtime,
            client,
            events,
        }
    }
}

impl ReplyStreamer for HttpChatAdapter {
    fn start_reply(&mut self, entry: EntryId, message: String) {
        let client = self.client.clone();
        let events = self.events.clone();

        self.runtime.spawn(async move {
            match client.open_reply(&message).await {
                Ok(response) => pump_reply(response, entry, &events).await,
                Err(error) => {
                    tracing::warn!(
                        entry = entry.index(),
                        error = %error,
                        "chat request handshake failed"
                    );
                    let _ = events.send(AppEvent::ReplyFailed {
                        entry,
                        reason: error.to_string(),
                    });
                }
            }
        });
    }
}

impl LogoutNavigator for HttpChatAdapter {
    fn navigate_logout(&self) -> Result<()> {
        self.runtime.block_on(self.client.logout())?;
        Ok(())
    }
}
