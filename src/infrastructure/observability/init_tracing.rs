use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

pub const LOG_FILE_PREFIX: &str = "pdfchat";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 5;

/// Daily rotated log files under `directory`, keeping the newest five.
pub fn build_file_appender(directory: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(directory)
}

/// Non-blocking writer for the configured log directory, if any.
///
/// Buffered lines are flushed when the returned guard is dropped.
pub fn file_writer(
    config: &TracingConfig,
) -> Result<Option<(NonBlocking, WorkerGuard)>, InitError> {
    let Some(directory) = config.directory.as_deref() else {
        return Ok(None);
    };
    let appender = build_file_appender(directory)?;
    Ok(Some(tracing_appender::non_blocking(appender)))
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Keep the returned guard alive for as long as file logging should run.
pub fn init_tracing(config: &TracingConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let (writer, guard, file_error) = match file_writer(config) {
        Ok(Some((writer, guard))) => (Some(writer), Some(guard), None),
        Ok(None) => (None, None, None),
        Err(e) => (None, None, Some(e)),
    };

    let fmt_layer = fmt::layer().with_target(true).with_line_number(true);

    let result = if config.json_format {
        let file_layer = writer.map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer)
        });
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json().with_current_span(true))
            .with(file_layer)
            .try_init()
    } else {
        let file_layer = writer.map(|writer| {
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(writer)
        });
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(file_layer)
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
        return None;
    }

    if let Some(e) = file_error {
        tracing::warn!(error = %e, "File logging disabled, could not open log directory");
    }

    tracing::info!(
        environment = %config.environment,
        level = %config.level,
        json_format = config.json_format,
        log_directory = ?config.directory,
        "Tracing initialized"
    );

    guard
}
