/*!
 * Client implementations for translation services.
 *
 * This module contains the client boundary used by the round-trip
 * translators:
 * - LibreTranslate: HTTP client for a LibreTranslate server
 * - Mock: scripted client for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for translation-service clients
///
/// This trait is the remote-procedure-call boundary of the system: one
/// translate operation over an opaque text payload. Implementations own
/// their transport configuration (endpoint, credentials, timeouts).
#[async_trait]
pub trait TranslateClient: Send + Sync + Debug {
    /// Translate text from one language to another
    ///
    /// # Arguments
    /// * `text` - The text to translate, passed through opaquely
    /// * `source_lang` - Language code of the input text
    /// * `target_lang` - Language code to translate into
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the service
    ///
    /// # Returns
    /// * `Result<(), ProviderError>` - Ok if the service is reachable, or an error
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod libretranslate;
pub mod mock;
