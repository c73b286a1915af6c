// file: src/logging/logger.rs
// version: 1.0.0
// guid: 5618bd97-b676-4f5f-9cbe-8f70aee88b73

//! Logger initialization and configuration

use crate::config::{LogLevel, LoggingConfig};
use crate::error::DriversError;
use crate::Result;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system.
///
/// Command output owns stdout, so console log lines go to stderr. A logfile
/// that cannot be opened is reported as a warning and logging continues on
/// the console only.
pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let (subscriber, logfile_error) = build_subscriber(config);

    subscriber
        .try_init()
        .map_err(|e| DriversError::logging(format!("Failed to initialize logger: {}", e)))?;

    match (&config.logfile, logfile_error) {
        (_, Some(e)) => tracing::warn!("{}, logging to the console only", e),
        (Some(path), None) => {
            tracing::debug!("Logging to {} at {}", path.display(), config.logfile_level)
        }
        (None, None) => {}
    }

    Ok(())
}

/// Build the subscriber for `config` without installing it.
///
/// Also returns the error from opening the logfile, if that failed.
pub fn build_subscriber(
    config: &LoggingConfig,
) -> (impl Subscriber + Send + Sync + 'static, Option<DriversError>) {
    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .with_filter(level_filter(config.stdout_level));

    let (file, logfile_error) = match config.logfile.as_deref().map(open_logfile) {
        Some(Ok(file)) => (Some(file), None),
        Some(Err(e)) => (None, Some(e)),
        None => (None, None),
    };

    let file_layer = file.map(|file| {
        fmt::layer()
            .with_target(false)
            .with_ansi(false) // No ANSI colors in log files
            .with_writer(Arc::new(file))
            .with_filter(level_filter(config.logfile_level))
    });

    let subscriber = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer);

    (subscriber, logfile_error)
}

/// Build the filter for one logging destination
pub fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.filter_directive())
}

/// Open the logfile for appending, creating it if needed
pub fn open_logfile(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            DriversError::logging(format!("Failed to open logfile {}: {}", path.display(), e))
        })
}

/// Create a scoped logger for operations
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}
