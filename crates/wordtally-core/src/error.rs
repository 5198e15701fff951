//! Error types for wordtally-core.
//!
//! Short input and empty categories are not errors: they surface as
//! [`Analysis::Rejected`](crate::analyze::Analysis::Rejected) and
//! [`CategoryTally::NoMatches`](crate::frequency::CategoryTally::NoMatches).

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when selecting what to analyze.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// An unknown category name was provided.
    #[error("unknown category: {name}. Use: {available}")]
    UnknownCategory {
        /// The category name that was requested.
        name: String,
        /// Comma-separated list of available category names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur when replaying recorded page events.
#[derive(Error, Debug)]
pub enum EventError {
    /// The event record could not be parsed.
    #[error("malformed event record: {0}")]
    Parse(#[from] serde_json::Error),

    /// The event log was configured with no room for entries.
    #[error("event log capacity must be at least 1")]
    ZeroCapacity,
}

/// Result type alias using [`EventError`].
pub type EventResult<T> = Result<T, EventError>;
