//! Error types for the TUI.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use pledge_core::LoadError;

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
