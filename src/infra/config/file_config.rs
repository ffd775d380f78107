use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, ServerConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub server: Option<FileServerConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(server) = self.server {
            server.merge_into(&mut config.server);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = file;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileServerConfig {
    pub base_url: Option<String>,
}

impl FileServerConfig {
    fn merge_into(self, config: &mut ServerConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub input: Option<bool>,
    pub transcript: Option<bool>,
    pub nav_panel: Option<bool>,
    pub flash_message: Option<String>,
    pub flash_hide_after_ms: Option<u64>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(input) = self.input {
            config.input = input;
        }

        if let Some(transcript) = self.transcript {
            config.transcript = transcript;
        }

        if let Some(nav_panel) = self.nav_panel {
            config.nav_panel = nav_panel;
        }

        if let Some(flash_message) = self.flash_message {
            config.flash_message = Some(flash_message);
        }

        if let Some(flash_hide_after_ms) = self.flash_hide_after_ms {
            config.flash_hide_after_ms = flash_hide_after_ms;
        }
    }
}
