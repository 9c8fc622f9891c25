/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::missing_field()` - Succeeds but omits the translated text
 * - `MockProvider::failing()` - Always fails with an error
 *
 * The provider counts every request it receives, which is how tests assert
 * that cache hits and negative-cache entries issue no remote calls.
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Provider, TranslateRequest, TranslateResponse};
use crate::errors::ProviderError;

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a deterministic translation
    Working,
    /// Succeeds with a well-formed response that omits the translated text
    MissingField,
    /// Always fails with a connection error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate requests received
    request_count: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock whose responses omit the translated text field
    pub fn missing_field() -> Self {
        Self::new(MockBehavior::MissingField)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of translate requests this mock has received
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Deterministic translation used by the working behavior
    fn render(request: &TranslateRequest) -> String {
        format!("[{}] {}", request.target_lang, request.query_text)
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(TranslateResponse {
                translated_text: Some(Self::render(request)),
            }),
            MockBehavior::MissingField => Ok(TranslateResponse {
                translated_text: None,
            }),
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "mock provider is configured to fail".to_string(),
            )),
        }
    }
}
