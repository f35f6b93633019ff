//! Error types for lookups and startup configuration

use thiserror::Error;

/// Why a lookup did not produce a result record.
///
/// Both variants render as the same single-line banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service answered with a non-success status.
    #[error("Pokémon not found")]
    NotFound,
    /// No usable response: connect error, timeout or malformed payload.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}
