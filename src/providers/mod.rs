/*!
 * Provider implementations for the remote translation capability.
 *
 * This module contains client implementations for translation services:
 * - LibreTranslate: self-hosted translation server
 * - Mock: call-counting test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A translation request handed to a provider
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    /// Text to translate
    pub query_text: String,
    /// Source language code, or "auto" for server-side detection
    pub source_lang: String,
    /// Target language code
    pub target_lang: String,
}

/// A translation response returned by a provider
///
/// The translated text is optional: a well-formed response may still omit
/// the field, in which case callers fall back to the original text.
#[derive(Debug, Clone)]
pub struct TranslateResponse {
    /// Translated text, if the service produced one
    pub translated_text: Option<String>,
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing the translation service to run against the real endpoint
/// or a test double interchangeably.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate a piece of text
    ///
    /// # Arguments
    /// * `request` - The translation request
    ///
    /// # Returns
    /// * `Result<TranslateResponse, ProviderError>` - The response from the provider or an error
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError>;
}

pub mod libretranslate;
pub mod mock;
