use isolang::Language;
use once_cell::sync::Lazy;

use crate::errors::ConfigError;

/// Language utilities for the LibreTranslate language allow-list
///
/// This module holds the fixed, closed set of language codes the backing
/// service accepts and provides membership validation for it. Codes are only
/// ever looked up for membership, never parsed or normalized.
/// The fixed set of language codes supported by LibreTranslate, sorted.
pub const SUPPORTED_LANGUAGES: [&str; 46] = [
    "ar", "az", "bg", "bn", "ca", "cs", "da", "de", "el", "en", "eo", "es",
    "et", "fa", "fi", "fr", "ga", "he", "hi", "hu", "id", "it", "ja", "ko",
    "lt", "lv", "ms", "nb", "nl", "pl", "pt", "ro", "ru", "sk", "sl", "sq",
    "sr", "sv", "th", "tl", "tr", "uk", "ur", "vi", "zh", "zt",
];

/// Comma-separated rendering of the supported set, used in error messages
static SUPPORTED_LANGUAGES_LIST: Lazy<String> =
    Lazy::new(|| SUPPORTED_LANGUAGES.join(", "));

/// Check if a language code is a member of the supported set
pub fn is_supported_language(code: &str) -> bool {
    SUPPORTED_LANGUAGES.binary_search(&code).is_ok()
}

/// Validate that a language code is a member of the supported set
///
/// On failure the error carries the offending code and the full valid set
/// for diagnostics.
pub fn validate_supported_language(code: &str) -> Result<(), ConfigError> {
    if is_supported_language(code) {
        Ok(())
    } else {
        Err(ConfigError::InvalidLanguage {
            code: code.to_string(),
            valid: SUPPORTED_LANGUAGES_LIST.clone(),
        })
    }
}

/// Get the English display name for a supported language code, if known
///
/// "zt" is the service's own alias for traditional Chinese and is not an
/// ISO 639-1 code, so it is handled separately.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "zt" => Some("Chinese (Traditional)"),
        _ => Language::from_639_1(code).map(|lang| lang.to_name()),
    }
}
