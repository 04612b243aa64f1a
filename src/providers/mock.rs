/*!
 * Mock translation client for testing.
 *
 * This module provides a scripted client that simulates different behaviors:
 * - `MockTranslateClient::identity()` - Returns the input text unchanged
 * - `MockTranslateClient::tagging()` - Tags the text with the translation direction
 * - `MockTranslateClient::failing()` - Always fails with an error
 * - `MockTranslateClient::fail_on_call(n)` - Fails only the nth call
 *
 * Every client records its calls in order so tests can assert on the exact
 * sequence of translate invocations.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::TranslateClient;

/// A single recorded translate call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// The text that was submitted
    pub text: String,
    /// Source language of the call
    pub source_lang: String,
    /// Target language of the call
    pub target_lang: String,
}

/// Behavior mode for the mock client
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Returns the input text unchanged
    Identity,
    /// Returns the input text tagged with the translation direction
    Tagging,
    /// Always fails with an error
    Failing,
    /// Fails only on the nth call (1-based), succeeds otherwise
    FailOnCall {
        /// Which call to fail, starting at 1
        call: usize,
    },
}

/// Mock client for testing round-trip translation behavior
#[derive(Debug)]
pub struct MockTranslateClient {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of calls seen so far
    call_count: Arc<AtomicUsize>,
    /// Ordered log of every call
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&RecordedCall) -> String>,
}

impl MockTranslateClient {
    /// Create a new mock client with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a mock client that translates every text to itself
    pub fn identity() -> Self {
        Self::new(MockBehavior::Identity)
    }

    /// Create a mock client that tags text with the translation direction
    pub fn tagging() -> Self {
        Self::new(MockBehavior::Tagging)
    }

    /// Create a failing mock client that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock client that fails only the nth call (1-based)
    pub fn fail_on_call(call: usize) -> Self {
        Self::new(MockBehavior::FailOnCall { call })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&RecordedCall) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Get the number of translate calls made so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the ordered log of every translate call made so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Clone for MockTranslateClient {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            calls: Arc::clone(&self.calls),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslateClient for MockTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;

        let call = RecordedCall {
            text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };
        self.calls.lock().unwrap().push(call.clone());

        if let Some(generator) = self.custom_response {
            return Ok(generator(&call));
        }

        match self.behavior {
            MockBehavior::Identity => Ok(text.to_string()),

            MockBehavior::Tagging => Ok(format!("[{}->{}] {}", source_lang, target_lang, text)),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::FailOnCall { call: fail_at } => {
                if count == fail_at {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated failure on call #{}", count),
                    })
                } else {
                    Ok(text.to_string())
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
