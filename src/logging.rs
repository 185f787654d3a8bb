//! Logger setup.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;

/// Errors that can occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Install the global logger.
///
/// Logs go to stderr, or to `log_file` when given. The file is truncated
/// first.
pub fn init_log(level: LevelFilter, log_file: Option<&Path>) -> Result<(), LogError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.try_init()?;
    log::info!("Initialized log!");
    Ok(())
}
