use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub server: ServerConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: "chime.log".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_owned(),
        }
    }
}

/// Which UI slots the shell is composed with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub input: bool,
    pub transcript: bool,
    pub nav_panel: bool,
    /// Flash banner text; the flash slot exists only when this is set.
    pub flash_message: Option<String>,
    pub flash_hide_after_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            input: true,
            transcript: true,
            nav_panel: true,
            flash_message: None,
            flash_hide_after_ms: 4_000,
        }
    }
}
