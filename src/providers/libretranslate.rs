use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::TranslateClient;

/// LibreTranslate client for interacting with a LibreTranslate server
#[derive(Debug, Clone)]
pub struct LibreTranslateClient {
    /// Base URL of the LibreTranslate API
    base_url: String,
    /// Optional API key for authentication
    api_key: Option<String>,
    /// HTTP client for making requests
    client: Client,
}

/// Translate request for the LibreTranslate API
#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    /// The text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Payload format, always plain text
    format: &'a str,
    /// API key, omitted when the server is open
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Translate response from the LibreTranslate API
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    /// The translated text
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Error body returned by the LibreTranslate API on failure
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    /// Error message from the server
    error: String,
}

impl LibreTranslateClient {
    /// Create a new LibreTranslate client bound to an endpoint
    ///
    /// No network call is made here; the connection is only exercised by
    /// `translate` and `test_connection`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Build a full API URL for the given route
    fn api_url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), route)
    }

    /// Map a non-success HTTP response to a provider error
    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => "Failed to get error response body".to_string(),
        };
        error!("LibreTranslate API error ({}): {}", status, message);
        match status.as_u16() {
            401 | 403 => ProviderError::AuthenticationError(message),
            code => ProviderError::ApiError {
                status_code: code,
                message,
            },
        }
    }
}

#[async_trait]
impl TranslateClient for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let request = TranslateRequest {
            q: text,
            source: source_lang,
            target: target_lang,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        debug!(
            "Requesting translation {} -> {} ({} chars)",
            source_lang,
            target_lang,
            text.len()
        );

        let response = self
            .client
            .post(self.api_url("translate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let translate_response = response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(translate_response.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let response = self
            .client
            .get(self.api_url("languages"))
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Ok(())
    }
}
