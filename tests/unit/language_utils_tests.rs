/*!
 * Tests for the supported-language set and its validation
 */

use yartt::errors::ConfigError;
use yartt::language_utils::{
    is_supported_language, language_name, validate_supported_language, SUPPORTED_LANGUAGES,
};

/// Test membership of every code in the supported set
#[test]
fn test_is_supported_language_withEveryListedCode_shouldReturnTrue() {
    for code in SUPPORTED_LANGUAGES {
        assert!(is_supported_language(code), "code '{}' should be supported", code);
    }
}

/// Test membership of codes outside the supported set
#[test]
fn test_is_supported_language_withUnknownCodes_shouldReturnFalse() {
    assert!(!is_supported_language("xx"));
    assert!(!is_supported_language("english"));
    assert!(!is_supported_language(""));
    // Membership is exact, codes are never normalized
    assert!(!is_supported_language("EN"));
    assert!(!is_supported_language(" en"));
}

/// Test validation of supported codes
#[test]
fn test_validate_supported_language_withValidCodes_shouldSucceed() {
    for code in SUPPORTED_LANGUAGES {
        assert!(validate_supported_language(code).is_ok());
    }
}

/// Test the diagnostics carried by a failed validation
#[test]
fn test_validate_supported_language_withInvalidCode_shouldNameCodeAndValidSet() {
    let error = validate_supported_language("klingon").unwrap_err();

    match &error {
        ConfigError::InvalidLanguage { code, valid } => {
            assert_eq!(code, "klingon");
            // The valid set is listed in full for diagnostics
            for supported in SUPPORTED_LANGUAGES {
                assert!(valid.contains(supported));
            }
        }
        other => panic!("expected InvalidLanguage, got {:?}", other),
    }

    let message = error.to_string();
    assert!(message.contains("klingon"));
    assert!(message.contains("en"));
}

/// Test display names for the codes the CLI lists
#[test]
fn test_language_name_withSupportedCodes_shouldReturnEnglishNames() {
    assert_eq!(language_name("en"), Some("English"));
    assert_eq!(language_name("de"), Some("German"));
    assert_eq!(language_name("ja"), Some("Japanese"));
    assert_eq!(language_name("eo"), Some("Esperanto"));
    assert_eq!(language_name("zt"), Some("Chinese (Traditional)"));
    assert_eq!(language_name("xx"), None);
}
