/*!
 * Tests for the cached translation service
 */

use std::sync::Arc;

use kinobot::TranslationService;
use kinobot::providers::mock::MockProvider;

use crate::common;

#[tokio::test]
async fn test_translate_withRepeatedText_shouldServeFromCache() {
    let (_db, repo) = common::catalog_repository();
    let mock = Arc::new(MockProvider::working());
    let service = TranslationService::new(mock.clone(), repo);

    let first = service
        .translate("Hello", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(first, "[ru] Hello");
    assert_eq!(mock.call_count(), 1);

    let second = service
        .translate("Hello", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(second, first);
    assert_eq!(mock.call_count(), 1, "Cache hit must not call the provider");
}

#[tokio::test]
async fn test_translate_withSameSourceAndTarget_shouldStillCache() {
    let (_db, repo) = common::catalog_repository();
    let mock = Arc::new(MockProvider::working());
    let service = TranslationService::new(mock.clone(), repo);

    service.translate("Hello", "en", "en").await.expect("Translate failed");
    service.translate("Hello", "en", "en").await.expect("Translate failed");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_translate_withDistinctKeys_shouldCallProviderPerKey() {
    let (_db, repo) = common::catalog_repository();
    let mock = Arc::new(MockProvider::working());
    let service = TranslationService::new(mock.clone(), repo);

    service.translate("Hello", "en", "ru").await.expect("Translate failed");
    // Case differences produce distinct keys: no normalization
    service.translate("hello", "en", "ru").await.expect("Translate failed");
    service.translate("Hello", "en", "de").await.expect("Translate failed");

    assert_eq!(mock.call_count(), 3);
}

#[tokio::test]
async fn test_translate_withFailingProvider_shouldNegativeCacheOriginalText() {
    let (_db, repo) = common::catalog_repository();
    let mock = Arc::new(MockProvider::failing());
    let service = TranslationService::new(mock.clone(), repo);

    let first = service
        .translate("Hello", "en", "ru")
        .await
        .expect("Failure must not surface to the caller");
    assert_eq!(first, "Hello");
    assert_eq!(mock.call_count(), 1);

    // The failure is cached permanently: no second remote attempt
    let second = service
        .translate("Hello", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(second, "Hello");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_translate_withMissingResponseField_shouldFallBackToOriginal() {
    let (_db, repo) = common::catalog_repository();
    let mock = Arc::new(MockProvider::missing_field());
    let service = TranslationService::new(mock.clone(), repo);

    let result = service
        .translate("Hello", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(result, "Hello");

    // Cached like any other result
    service.translate("Hello", "en", "ru").await.expect("Translate failed");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_translate_withEmptyText_shouldSkipCacheAndProvider() {
    let (_db, repo) = common::catalog_repository();
    let mock = Arc::new(MockProvider::working());
    let service = TranslationService::new(mock.clone(), repo.clone());

    let result = service
        .translate("", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(result, "");
    assert_eq!(mock.call_count(), 0);

    let stats = repo.stats().expect("Stats failed");
    assert_eq!(stats.cache_count, 0, "Empty input must not create a cache row");
}

#[tokio::test]
async fn test_translate_acrossServiceInstances_shouldShareThePersistentCache() {
    let (_db, repo) = common::catalog_repository();

    let first_mock = Arc::new(MockProvider::working());
    let first_service = TranslationService::new(first_mock.clone(), repo.clone());
    first_service
        .translate("Hello", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(first_mock.call_count(), 1);

    // A fresh service over the same store sees the cached value
    let second_mock = Arc::new(MockProvider::working());
    let second_service = TranslationService::new(second_mock.clone(), repo);
    let result = second_service
        .translate("Hello", "en", "ru")
        .await
        .expect("Translate failed");
    assert_eq!(result, "[ru] Hello");
    assert_eq!(second_mock.call_count(), 0);
}
