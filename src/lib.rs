/*!
 * # yartt - Yet Another Round-Trip Translator
 *
 * A Rust library for round-trip translation (RTT): translate a text to
 * another language and back to produce a paraphrase, useful for data
 * augmentation and text perturbation.
 *
 * ## Features
 *
 * - Round-trip translation contract with pluggable backends
 * - LibreTranslate backend performing two sequential remote calls
 * - Fixed supported-language allow-list with construction-time validation
 * - Endpoint and API key defaults supplied from the environment
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Translator configuration and environment defaults
 * - `translation`: Round-trip translation contract and backends:
 *   - `translation::libretranslate`: LibreTranslate round-trip translator
 * - `providers`: Client implementations for translation services:
 *   - `providers::libretranslate`: LibreTranslate API client
 *   - `providers::mock`: Scripted client for tests
 * - `language_utils`: Supported-language set and validation
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::RttConfig;
pub use errors::{AppError, ConfigError, ProviderError, TranslationError};
pub use language_utils::{is_supported_language, validate_supported_language, SUPPORTED_LANGUAGES};
pub use providers::TranslateClient;
pub use translation::{LibreTranslateRtt, RoundTripTranslator};
