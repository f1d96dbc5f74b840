//! Server configuration
//!
//! Read once at startup from Shuttle secrets (`Secrets.toml` locally).

use std::time::Duration;

use tenor::DomainError;

pub const DEFAULT_SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const DEFAULT_INTENT_MODEL: &str = "facebook/bart-large-mnli";
pub const DEFAULT_INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for model backends
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Sentiment model ID
    pub sentiment_model: String,
    /// Zero-shot (NLI) model ID used for intent detection
    pub intent_model: String,
    /// Base URL of a Hugging Face compatible inference API
    pub inference_base_url: String,
    /// Bearer token for the inference API
    pub api_token: Option<String>,
    /// Timeout for each inference request
    pub request_timeout: Duration,
    /// Run warm-up calls before accepting traffic
    pub verify_models_on_startup: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            sentiment_model: DEFAULT_SENTIMENT_MODEL.to_string(),
            intent_model: DEFAULT_INTENT_MODEL.to_string(),
            inference_base_url: DEFAULT_INFERENCE_BASE_URL.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verify_models_on_startup: true,
        }
    }
}

impl ServerConfig {
    /// Build configuration from a key lookup (blank values count as unset)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let request_timeout = match get("INFERENCE_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|_| {
                DomainError::Configuration(format!("INFERENCE_TIMEOUT_SECS is not a number: {}", raw))
            })?),
            None => defaults.request_timeout,
        };

        let verify_models_on_startup = match get("VERIFY_MODELS_ON_STARTUP") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                DomainError::Configuration(format!("VERIFY_MODELS_ON_STARTUP is not a boolean: {}", raw))
            })?,
            None => defaults.verify_models_on_startup,
        };

        Ok(Self {
            sentiment_model: get("SENTIMENT_MODEL").unwrap_or(defaults.sentiment_model),
            intent_model: get("INTENT_MODEL").unwrap_or(defaults.intent_model),
            inference_base_url: get("INFERENCE_BASE_URL").unwrap_or(defaults.inference_base_url),
            api_token: get("HF_API_TOKEN"),
            request_timeout,
            verify_models_on_startup,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
