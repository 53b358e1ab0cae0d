// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration store.
//!
//! These errors are produced by [`ConfigStore`](crate::ports::ConfigStore)
//! implementations. The scoped view never propagates them: a failed lookup
//! is simply an absent value from the consumer's point of view.

use thiserror::Error;

/// The main error type for configuration store operations.
///
/// # Examples
///
/// ```
/// use scopedcfg::domain::errors::ConfigError;
///
/// fn lookup() -> Result<i64, ConfigError> {
///     Err(ConfigError::ConfigKeyNotFound {
///         key: "pluginsConfig['Tracer'].depth".to_string(),
///     })
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key does not resolve to any value in the store.
    #[error("Configuration key not found: {key}")]
    ConfigKeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The key resolved, but the value has a different shape than requested.
    #[error("Configuration value for key '{key}' has type {found}, expected {expected}")]
    TypeMismatch {
        /// The key being looked up
        key: String,
        /// The kind of value the caller asked for
        expected: &'static str,
        /// The kind of value actually stored
        found: &'static str,
    },

    /// The key path could not be parsed.
    #[error("Invalid configuration key path '{key}': {message}")]
    InvalidKeyPath {
        /// The offending key path
        key: String,
        /// What is wrong with it
        message: String,
    },

    /// Failed to parse configuration content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A configuration store could not be loaded or reloaded.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the store that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `TypeMismatch` error for the given key.
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ConfigError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Creates an `InvalidKeyPath` error for the given key.
    pub fn invalid_path(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidKeyPath {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error means the key simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::ConfigKeyNotFound { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
