//! Tenor API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use tenor::{Annotation, HistoryEntry};

/// API Client for Tenor
pub struct TenorClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    content: &'a str,
    chat_history: &'a [HistoryEntry],
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub sentiment_model: String,
    pub intent_model: String,
}

impl TenorClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Service status
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to Tenor API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Annotate a message
    pub async fn analyze(&self, content: &str, chat_history: &[HistoryEntry]) -> Result<Annotation> {
        let url = format!("{}/analyze", self.base_url);
        let resp = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(&AnalyzeRequest {
                content,
                chat_history,
            })
            .send()
            .await
            .context("Failed to connect to Tenor API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Annotate a message, substituting a neutral annotation on any failure
    pub async fn analyze_or_fallback(
        &self,
        content: &str,
        chat_history: &[HistoryEntry],
    ) -> (Annotation, Option<anyhow::Error>) {
        match self.analyze(content, chat_history).await {
            Ok(annotation) => (annotation, None),
            Err(e) => (Annotation::fallback(content), Some(e)),
        }
    }
}
