use async_trait::async_trait;
use log::debug;

use crate::app_config::RttConfig;
use crate::errors::{ConfigError, TranslationError};
use crate::language_utils::validate_supported_language;
use crate::providers::libretranslate::LibreTranslateClient;
use crate::providers::TranslateClient;
use crate::translation::RoundTripTranslator;

/// Round-trip translator backed by a LibreTranslate server
///
/// Translates text to the target language and back to the source language
/// using two sequential calls against the same service. LibreTranslate is
/// documented to only translate between English and another supported
/// language; validation here checks set membership only and does not force
/// one side of the pair to be "en", matching the service's own behavior of
/// rejecting unsupported pairs at request time.
///
/// Each call is an independent two-step pipeline over immutable
/// configuration. There is no caching: repeating a call with identical input
/// performs both remote calls again.
#[derive(Debug)]
pub struct LibreTranslateRtt<C: TranslateClient = LibreTranslateClient> {
    /// Client handle for the translation service
    client: C,
    /// Source language code
    source_lang: String,
    /// Target language code
    target_lang: String,
}

impl LibreTranslateRtt {
    /// Create a translator for the given target language
    ///
    /// The source language defaults to "en"; the endpoint and API key are
    /// taken from the `LT_ENDPOINT` / `LT_API_KEY` environment variables.
    pub fn new(target_lang: impl Into<String>) -> Result<Self, TranslationError> {
        Self::with_config(RttConfig::from_env(target_lang))
    }

    /// Create a translator from an explicit configuration
    ///
    /// Fails with a configuration error if no endpoint is available, and
    /// with an invalid-argument error if either language code is not in the
    /// supported set. No network call is made here.
    pub fn with_config(config: RttConfig) -> Result<Self, TranslationError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        let client = LibreTranslateClient::new(endpoint, config.api_key, config.timeout_secs);
        Ok(Self::with_client(
            client,
            config.source_language,
            config.target_language,
        )?)
    }
}

impl<C: TranslateClient> LibreTranslateRtt<C> {
    /// Create a translator around an existing client handle
    ///
    /// The client already owns its endpoint, so only the language codes are
    /// validated here.
    pub fn with_client(
        client: C,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let source_lang = source_lang.into();
        let target_lang = target_lang.into();

        validate_supported_language(&source_lang)?;
        validate_supported_language(&target_lang)?;

        Ok(Self {
            client,
            source_lang,
            target_lang,
        })
    }

    /// Get a reference to the underlying client handle
    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: TranslateClient> RoundTripTranslator for LibreTranslateRtt<C> {
    fn source_lang(&self) -> &str {
        &self.source_lang
    }

    fn target_lang(&self) -> &str {
        &self.target_lang
    }

    async fn rtt(&self, text: &str) -> Result<String, TranslationError> {
        debug!(
            "Round-trip translating {} -> {} -> {}",
            self.source_lang, self.target_lang, self.source_lang
        );

        let intermediate = self
            .client
            .translate(text, &self.source_lang, &self.target_lang)
            .await?;
        let back = self
            .client
            .translate(&intermediate, &self.target_lang, &self.source_lang)
            .await?;

        Ok(back)
    }
}
