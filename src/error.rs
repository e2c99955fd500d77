use thiserror::Error;

use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Top-level failure of a mailroom run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}
