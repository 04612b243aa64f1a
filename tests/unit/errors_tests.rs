/*!
 * Tests for error types and their conversions
 */

use yartt::errors::{AppError, ConfigError, ProviderError, TranslationError};

/// Test the display output of provider errors
#[test]
fn test_providerError_display_shouldIncludeDetails() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "Slowdown requested".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("429"));
    assert!(message.contains("Slowdown requested"));

    let error = ProviderError::RequestFailed("connection refused".to_string());
    assert!(error.to_string().contains("connection refused"));
}

/// Test the display output of configuration errors
#[test]
fn test_configError_display_shouldMentionEnvironmentVariable() {
    let error = ConfigError::MissingEndpoint;
    assert!(error.to_string().contains("LT_ENDPOINT"));
}

/// Test error conversion into the translation error wrapper
#[test]
fn test_translationError_fromProviderError_shouldWrapUnchanged() {
    let provider_error = ProviderError::AuthenticationError("bad key".to_string());
    let translation_error: TranslationError = provider_error.into();

    match translation_error {
        TranslationError::Provider(ProviderError::AuthenticationError(message)) => {
            assert_eq!(message, "bad key");
        }
        other => panic!("expected wrapped AuthenticationError, got {:?}", other),
    }
}

/// Test error conversion into the top-level application error
#[test]
fn test_appError_fromTranslationError_shouldWrap() {
    let error: AppError = TranslationError::Config(ConfigError::MissingEndpoint).into();
    assert!(matches!(error, AppError::Translation(_)));

    let error: AppError = anyhow::anyhow!("something else").into();
    assert!(matches!(error, AppError::Unknown(_)));
    assert!(error.to_string().contains("something else"));
}
