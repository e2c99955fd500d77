pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

use crate::cli::Cli;
use crate::error::AppError;

/// Load config, start logging, and run the terminal UI.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    if logging::init_tracing(&config.logging)? {
        tracing::debug!(?config, "configuration loaded");
    }
    ui::runtime::run(&config)
}
