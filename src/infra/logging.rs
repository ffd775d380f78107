use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Initializes file-backed logging.
///
/// Log output goes to a file rather than stdout/stderr so it never corrupts
/// the raw-mode terminal. The returned guard must stay alive for the process
/// lifetime or buffered lines are dropped.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let appender = tracing_appender::rolling::never(".", &config.file);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}
