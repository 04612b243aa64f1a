/*!
 * Round-trip translation services.
 *
 * This module defines the round-trip translation contract and its concrete
 * backends:
 * - `translation::libretranslate`: round-trip translation via a LibreTranslate server
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::TranslationError;

/// Common trait for round-trip translators
///
/// A round-trip translator holds a fixed source/target language pair and
/// exposes a single capability: translate text to the target language and
/// back, producing a paraphrase of the input. Backends supply the behavior;
/// the contract makes no promise about translation semantics beyond
/// "returns a text string".
#[async_trait]
pub trait RoundTripTranslator: Send + Sync + Debug {
    /// The source language code, fixed at construction
    fn source_lang(&self) -> &str;

    /// The target language code, fixed at construction
    fn target_lang(&self) -> &str;

    /// Run the round-trip translation on the given text
    ///
    /// # Arguments
    /// * `text` - The input text, empty or not
    ///
    /// # Returns
    /// * `Result<String, TranslationError>` - The round-trip-translated text or an error
    async fn rtt(&self, text: &str) -> Result<String, TranslationError>;
}

pub mod libretranslate;

pub use libretranslate::LibreTranslateRtt;
