//! Configuration management
//!
//! All secrets (API key, remote credentials) are supplied through the
//! environment; nothing is compiled in.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::models::TargetLanguage;

/// Default chat-completion endpoint
const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier
const DEFAULT_MODEL: &str = "gpt-4";

/// Configuration for the chat-completion translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Bearer token for the translation API
    pub api_key: String,
    /// Chat-completion endpoint URL
    pub api_endpoint: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Soft cap, in characters, on each chunk sent for translation
    pub max_chunk_size: usize,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_chunk_size: 800,
            timeout_secs: 40,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY environment variable is required"))?;

        let api_endpoint = std::env::var("TRANSLATOR_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        let model =
            std::env::var("TRANSLATOR_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature = std::env::var("TRANSLATOR_TEMPERATURE")
            .unwrap_or_else(|_| "0.7".to_string())
            .parse::<f64>()?;

        let max_chunk_size = std::env::var("MAX_CHUNK_SIZE")
            .unwrap_or_else(|_| "800".to_string())
            .parse::<usize>()?;

        let timeout_secs = std::env::var("TRANSLATE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "40".to_string())
            .parse::<u64>()?;

        Ok(Self {
            api_key,
            api_endpoint,
            model,
            temperature,
            max_chunk_size,
            timeout_secs,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            return Err(anyhow::anyhow!("API key is required"));
        }

        if self.api_endpoint.is_empty() {
            return Err(anyhow::anyhow!("API endpoint is required"));
        }

        if self.model.is_empty() {
            return Err(anyhow::anyhow!("model is required"));
        }

        if self.max_chunk_size == 0 {
            return Err(anyhow::anyhow!("max_chunk_size must be greater than 0"));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("timeout_secs must be greater than 0"));
        }

        Ok(())
    }
}

/// Configuration for the remote site that receives translated posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSiteConfig {
    /// Base URL of the remote WordPress site
    pub base_url: String,
    /// Username that owns the application password
    pub username: String,
    /// Application password used for Basic auth
    pub app_password: String,
    /// Accept invalid TLS certificates; verification is on by default
    pub accept_invalid_certs: bool,
}

impl TargetSiteConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("TARGET_SITE_URL")
            .map_err(|_| anyhow::anyhow!("TARGET_SITE_URL environment variable is required"))?;

        let username = std::env::var("TARGET_SITE_USERNAME").map_err(|_| {
            anyhow::anyhow!("TARGET_SITE_USERNAME environment variable is required")
        })?;

        let app_password = std::env::var("TARGET_SITE_APP_PASSWORD").map_err(|_| {
            anyhow::anyhow!("TARGET_SITE_APP_PASSWORD environment variable is required")
        })?;

        let accept_invalid_certs = std::env::var("TARGET_SITE_ACCEPT_INVALID_CERTS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            base_url,
            username,
            app_password,
            accept_invalid_certs,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("target site URL is required"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!("target site URL must be http(s)"));
        }

        if self.username.is_empty() || self.app_password.is_empty() {
            return Err(anyhow::anyhow!("target site credentials are required"));
        }

        if self.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for the target site");
        }

        Ok(())
    }
}

/// Full sync configuration: translator, target site, and the selected language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Translator settings
    pub translator: TranslatorConfig,
    /// Remote site settings
    pub target: TargetSiteConfig,
    /// Selected target language; `None` disables translation entirely
    pub language: Option<TargetLanguage>,
}

impl SyncConfig {
    /// Load everything from the environment, reading `.env` first if present
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let translator = TranslatorConfig::from_env()?;
        let target = TargetSiteConfig::from_env()?;

        let language = match std::env::var("TARGET_LANGUAGE") {
            Ok(code) if !code.is_empty() => Some(
                TargetLanguage::from_code(&code)
                    .ok_or_else(|| anyhow::anyhow!("unsupported target language: {}", code))?,
            ),
            _ => None,
        };

        Ok(Self {
            translator,
            target,
            language,
        })
    }

    /// Validate all sections
    pub fn validate(&self) -> anyhow::Result<()> {
        self.translator.validate()?;
        self.target.validate()?;
        Ok(())
    }
}
