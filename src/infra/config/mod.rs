mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, LogConfig, ServerConfig, UiConfig};
pub use loader::load;
