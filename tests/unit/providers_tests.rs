/*!
 * Tests for the LibreTranslate API client
 *
 * These run against an unreachable endpoint on purpose: nothing listens on
 * port 1, so the connection is refused immediately and the client's error
 * mapping is exercised without a live server.
 */

use yartt::errors::ProviderError;
use yartt::providers::libretranslate::LibreTranslateClient;
use yartt::providers::TranslateClient;

/// Test the connection probe against an unreachable endpoint
#[tokio::test]
async fn test_testConnection_withUnreachableEndpoint_shouldReturnRequestFailed() {
    let client = LibreTranslateClient::new("http://127.0.0.1:1", None, 2);

    let error = client.test_connection().await.unwrap_err();
    assert!(matches!(error, ProviderError::RequestFailed(_)));
}

/// Test the translate route against an unreachable endpoint
#[tokio::test]
async fn test_translate_withUnreachableEndpoint_shouldReturnRequestFailed() {
    let client = LibreTranslateClient::new("http://127.0.0.1:1", Some("key".to_string()), 2);

    let error = client.translate("hello", "en", "fr").await.unwrap_err();
    assert!(matches!(error, ProviderError::RequestFailed(_)));
}
