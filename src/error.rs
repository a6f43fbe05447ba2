//! Error types for anime-docs-mcp.
//!
//! Unknown identifiers are not errors: handlers answer them with a normal
//! "not found" response listing valid alternatives. Everything here is a
//! genuine failure that reaches the client as a JSON-RPC error.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Failure inside a handler. Counted by the circuit breaker.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// A response could not be serialised.
    #[error("failed to serialise response: {0}")]
    Serialise(#[from] serde_json::Error),

    /// Any other internal failure.
    #[error("{0}")]
    Internal(String),
}

/// Errors surfaced by the request dispatcher.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Params failed their method schema. The handler never ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No handler exists for the method.
    #[error("Unknown method: {method}")]
    UnknownMethod {
        /// The requested method name.
        method: String,
    },

    /// The breaker guarding handler execution is open.
    #[error("Service temporarily unavailable: circuit breaker '{name}' is open")]
    BreakerOpen {
        /// Name of the open breaker.
        name: String,
    },

    /// A handler failed.
    #[error("Error executing {method}: {source}")]
    Handler {
        /// Method whose handler failed.
        method: String,
        /// The handler's error.
        #[source]
        source: HandlerError,
    },
}
