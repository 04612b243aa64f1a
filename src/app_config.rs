use serde::{Deserialize, Serialize};
use std::env;

/// Translator configuration module
/// This module handles the configuration of a round-trip translator,
/// including the one-time environment lookup that supplies defaults.
/// Environment variable holding the default LibreTranslate endpoint URL
pub const ENDPOINT_ENV: &str = "LT_ENDPOINT";

/// Environment variable holding the default LibreTranslate API key
pub const API_KEY_ENV: &str = "LT_API_KEY";

/// Configuration for a round-trip translator
///
/// Holds the two language codes and the connection details for the remote
/// service. No validation happens here; the concrete translator validates at
/// construction time since the valid language set depends on the backend.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RttConfig {
    /// Target language code
    pub target_language: String,

    /// Source language code
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Remote service endpoint URL
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Optional API key for the remote service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl RttConfig {
    /// Create a configuration with the given target language and no endpoint
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            target_language: target_language.into(),
            source_language: default_source_language(),
            endpoint: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Create a configuration with endpoint and API key defaults taken from
    /// the process environment (`LT_ENDPOINT` / `LT_API_KEY`)
    ///
    /// The environment is read here, once, and never re-read afterwards.
    pub fn from_env(target_language: impl Into<String>) -> Self {
        Self {
            endpoint: env::var(ENDPOINT_ENV).ok().filter(|v| !v.is_empty()),
            api_key: env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty()),
            ..Self::new(target_language)
        }
    }

    /// Override the source language (defaults to "en")
    pub fn with_source_language(mut self, source_language: impl Into<String>) -> Self {
        self.source_language = source_language.into();
        self
    }

    /// Override the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
