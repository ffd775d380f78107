use tokio::runtime::Runtime;

use crate::{chat::ChatClient, infra::config::AppConfig};

/// Long-lived application collaborators shared across use cases.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub runtime: Runtime,
    pub client: ChatClient,
}

impl AppContext {
    pub fn new(config: AppConfig, runtime: Runtime, client: ChatClient) -> Self {
        Self {
            config,
            runtime,
            client,
        }
    }
}
