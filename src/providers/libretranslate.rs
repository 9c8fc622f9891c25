use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Provider, TranslateRequest, TranslateResponse};
use crate::errors::ProviderError;

/// LibreTranslate client for interacting with a translation server
#[derive(Debug)]
pub struct LibreTranslate {
    /// Full URL of the translate endpoint
    endpoint: String,
    /// HTTP client for making requests
    client: Client,
}

/// Request body for the translate endpoint
#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code or "auto"
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Response format; this client only speaks plain text
    format: &'a str,
}

/// Response body from the translate endpoint
#[derive(Debug, Deserialize)]
struct TranslateReply {
    /// Translated text; tolerated as absent on malformed replies
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

impl LibreTranslate {
    /// Create a new client for the given endpoint with a bounded timeout
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Provider for LibreTranslate {
    async fn translate(&self, request: &TranslateRequest) -> Result<TranslateResponse, ProviderError> {
        let body = TranslateBody {
            q: &request.query_text,
            source: &request.source_lang,
            target: &request.target_lang,
            format: "text",
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let reply: TranslateReply = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(TranslateResponse {
            translated_text: reply.translated_text,
        })
    }
}
