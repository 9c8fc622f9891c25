/*!
 * Read-through translation cache service.
 *
 * On a cache miss the remote provider is called and the result persisted;
 * on provider failure the original text is persisted instead, so a failing
 * lookup is not retried on every subsequent call. Entries never expire.
 */

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use crate::database::Repository;
use crate::database::models::TranslationRecord;
use crate::providers::{Provider, TranslateRequest};

/// Translation service backed by a provider and a persistent cache
#[derive(Clone)]
pub struct TranslationService {
    /// Remote translation capability
    provider: Arc<dyn Provider>,
    /// Persistent cache storage
    repository: Repository,
}

impl TranslationService {
    /// Create a new translation service
    pub fn new(provider: Arc<dyn Provider>, repository: Repository) -> Self {
        Self {
            provider,
            repository,
        }
    }

    /// Translate a piece of text, consulting the cache first
    ///
    /// Empty input short-circuits to an empty result with no cache
    /// interaction and no remote call. Provider failures fall back to the
    /// original text and are cached like any other result; only store-level
    /// failures surface as errors.
    ///
    /// The cache lookup releases the database connection before the remote
    /// call starts; concurrent misses for the same key each call the remote
    /// service and the last write wins.
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let key = cache_key(source_lang, target_lang, text);

        if let Some(cached) = self.repository.cached_translation(&key).await? {
            return Ok(cached);
        }

        let request = TranslateRequest {
            query_text: text.to_string(),
            source_lang: source_lang.to_string(),
            target_lang: target_lang.to_string(),
        };

        let translated = match self.provider.translate(&request).await {
            Ok(response) => match response.translated_text {
                Some(translated) => translated,
                None => {
                    warn!(
                        "Translation response for '{}' had no translated text, keeping original",
                        truncate_text(text, 30)
                    );
                    text.to_string()
                }
            },
            Err(e) => {
                warn!(
                    "Translation request for '{}' ({} -> {}) failed: {}",
                    truncate_text(text, 30),
                    source_lang,
                    target_lang,
                    e
                );
                text.to_string()
            }
        };

        // Written on failure too: the original text becomes a permanent
        // negative-cache entry for this key.
        self.repository
            .store_translation(&TranslationRecord::new(key, translated.clone()))
            .await?;

        debug!(
            "Cached translation for '{}' ({} -> {})",
            truncate_text(text, 30),
            source_lang,
            target_lang
        );

        Ok(translated)
    }
}

/// Build the exact-match cache key for a lookup
///
/// The key is the literal concatenation of the language pair and the text;
/// case and whitespace differences produce distinct keys.
fn cache_key(source_lang: &str, target_lang: &str, text: &str) -> String {
    format!("{}_{}_{}", source_lang, target_lang, text)
}

/// Truncate text to a maximum length with ellipsis
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(max_length).collect::<String>())
    }
}
