//! Chat-completion translation client
//!
//! One chunk in, translated text out. No retry and no fallback: any
//! transport failure, non-success status, or malformed response is surfaced
//! to the caller, which aborts the whole document.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, SyncError};
use crate::core::models::TargetLanguage;

/// Translation seam: one chunk plus a target language to translated text
///
/// Implemented by [`ChatTranslator`] in production and by mocks in tests, so
/// the pipeline can be driven without network access.
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate a single chunk into the target language
    async fn translate(&self, chunk: &str, language: TargetLanguage) -> Result<String>;
}

/// Translator backed by a remote chat-completion API
#[derive(Debug, Clone)]
pub struct ChatTranslator {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl ChatTranslator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env()?;
        Self::new(config)
    }

    /// Natural-language instruction embedding the raw chunk
    ///
    /// The language code goes straight into the prompt text; there is no
    /// structured translation API behind this.
    fn build_prompt(chunk: &str, language: TargetLanguage) -> String {
        format!(
            "Translate this HTML content to {}: {}",
            language.code(),
            chunk
        )
    }

    /// Request body for the chat-completion call
    fn request_body(&self, chunk: &str, language: TargetLanguage) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [{
                "role": "user",
                "content": Self::build_prompt(chunk, language),
            }],
            "temperature": self.config.temperature,
        })
    }

    /// Pull `choices[0].message.content` out of a response body
    fn extract_translation(json: &serde_json::Value) -> Result<String> {
        json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| SyncError::InvalidResponse {
                message: "no translation in response".to_string(),
            })
    }

    /// Send the actual HTTP request
    async fn send_request(&self, chunk: &str, language: TargetLanguage) -> Result<String> {
        let body = self.request_body(chunk, language);

        let response = self
            .client
            .post(&self.config.api_endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let json: serde_json::Value = response.json().await?;
            let translation = Self::extract_translation(&json)?;

            debug!(
                "Translated chunk of {} chars to {}",
                chunk.len(),
                language.code()
            );

            Ok(translation)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(SyncError::Api {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl Translate for ChatTranslator {
    async fn translate(&self, chunk: &str, language: TargetLanguage) -> Result<String> {
        match self.send_request(chunk, language).await {
            Ok(translation) => Ok(translation),
            Err(e) => {
                warn!("Translation request failed: {}", e);
                Err(e)
            }
        }
    }
}
