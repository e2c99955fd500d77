//! File-backed `tracing` setup.
//!
//! The terminal is owned by the UI, so log lines go to a file or nowhere.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file '{path}': {source}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter { directive: String, message: String },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when no log file is configured.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let filter = resolve_filter(
        &config.level,
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
    )?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LoggingError::OpenFile {
            path: path.clone(),
            source: e,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::OpenFile {
            path: path.clone(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(true)
}

/// A non-empty, parseable `RUST_LOG` wins; otherwise the configured
/// directive is used.
fn resolve_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = rust_log
        .filter(|env| !env.trim().is_empty())
        .and_then(|env| EnvFilter::try_new(env).ok())
    {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidFilter {
        directive: level.to_string(),
        message: e.to_string(),
    })
}
