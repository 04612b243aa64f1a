/*!
 * Error types for the yartt application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when building a translator from configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No translation endpoint was given and none is present in the environment
    #[error("no endpoint available: set the LT_ENDPOINT environment variable or pass a valid url")]
    MissingEndpoint,

    /// A language code is not in the supported set
    #[error("invalid language '{code}', must be one of: {valid}")]
    InvalidLanguage {
        /// The offending language code
        code: String,
        /// The full set of valid codes, comma separated
        valid: String,
    },
}

/// Errors that can occur when talking to the translation service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during a round-trip translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from translator configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the translation service, propagated unchanged
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
