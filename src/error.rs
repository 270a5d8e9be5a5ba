//! Site initialization errors

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the site from initializing
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration value could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for site initialization
pub type SiteResult<T> = Result<T, SiteError>;
