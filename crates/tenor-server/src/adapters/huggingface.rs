//! Hugging Face Inference Adapters
//!
//! Sentiment and zero-shot classification over the Hugging Face Inference API
//! (or any server speaking the same `POST /models/{model}` protocol).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use tenor::{ClassifierOutput, DomainError, SentimentClassifier, ZeroShotClassifier, ZeroShotRanking};

/// Errors raised while talking to an inference endpoint
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("request to {model} failed: {source}")]
    Transport {
        model: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{model} returned {status}: {body}")]
    Status {
        model: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {model}: {detail}")]
    Decode { model: String, detail: String },
}

impl From<InferenceError> for DomainError {
    fn from(e: InferenceError) -> Self {
        DomainError::ExternalService(e.to_string())
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a, P: Serialize> {
    inputs: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<P>,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Text-classification output comes back batched or flat depending on the server
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SentimentResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

/// Shared HTTP client for inference calls
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl InferenceClient {
    pub fn new(
        base_url: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tenor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }

    async fn infer<P, R>(
        &self,
        model: &str,
        inputs: &str,
        parameters: Option<P>,
    ) -> Result<R, InferenceError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = InferenceRequest {
            inputs,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut builder = self.client.post(self.model_url(model)).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let transport = |source| InferenceError::Transport {
            model: model.to_string(),
            source,
        };

        let response = builder.send().await.map_err(transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InferenceError::Status {
                model: model.to_string(),
                status,
                body,
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(|e| InferenceError::Decode {
            model: model.to_string(),
            detail: e.to_string(),
        })
    }
}

/// Pretrained sentiment model behind the inference API
pub struct HfSentimentClassifier {
    client: InferenceClient,
    model: String,
}

impl HfSentimentClassifier {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl SentimentClassifier for HfSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<ClassifierOutput, DomainError> {
        let response: SentimentResponse = self
            .client
            .infer::<(), _>(&self.model, text, None)
            .await?;

        Ok(top_prediction(&self.model, response)?)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn top_prediction(model: &str, response: SentimentResponse) -> Result<ClassifierOutput, InferenceError> {
    let candidates = match response {
        SentimentResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
        SentimentResponse::Flat(candidates) => candidates,
    };

    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|best| ClassifierOutput {
            label: best.label,
            score: best.score,
        })
        .ok_or_else(|| InferenceError::Decode {
            model: model.to_string(),
            detail: "no predictions returned".to_string(),
        })
}

/// Pretrained zero-shot (NLI) model behind the inference API
pub struct HfZeroShotClassifier {
    client: InferenceClient,
    model: String,
}

impl HfZeroShotClassifier {
    pub fn new(client: InferenceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ZeroShotClassifier for HfZeroShotClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> Result<ZeroShotRanking, DomainError> {
        let response: ZeroShotResponse = self
            .client
            .infer(&self.model, text, Some(ZeroShotParameters { candidate_labels }))
            .await?;

        Ok(into_ranking(&self.model, response)?)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn into_ranking(model: &str, response: ZeroShotResponse) -> Result<ZeroShotRanking, InferenceError> {
    if response.labels.len() != response.scores.len() {
        return Err(InferenceError::Decode {
            model: model.to_string(),
            detail: format!(
                "{} labels but {} scores",
                response.labels.len(),
                response.scores.len()
            ),
        });
    }

    let mut ranked: Vec<(String, f64)> = response.labels.into_iter().zip(response.scores).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let (labels, scores): (Vec<String>, Vec<f64>) = ranked.into_iter().unzip();

    Ok(ZeroShotRanking { labels, scores })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    /// Serve a stub inference API on an ephemeral port and return its base URL
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: &str, token: Option<&str>) -> InferenceClient {
        InferenceClient::new(base_url, token.map(str::to_string), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_top_prediction_handles_both_shapes() {
        let batched: SentimentResponse = serde_json::from_value(json!([[
            {"label": "NEGATIVE", "score": 0.1},
            {"label": "POSITIVE", "score": 0.9}
        ]]))
        .unwrap();
        let flat: SentimentResponse =
            serde_json::from_value(json!([{"label": "NEGATIVE", "score": 0.97}])).unwrap();

        assert_eq!(top_prediction("m", batched).unwrap().label, "POSITIVE");
        assert_eq!(top_prediction("m", flat).unwrap().score, 0.97);
    }

    #[test]
    fn test_top_prediction_rejects_empty_output() {
        let empty: SentimentResponse = serde_json::from_value(json!([[]])).unwrap();
        assert!(matches!(
            top_prediction("m", empty),
            Err(InferenceError::Decode { .. })
        ));
    }

    #[test]
    fn test_into_ranking_sorts_and_validates() {
        let ranking = into_ranking(
            "m",
            ZeroShotResponse {
                labels: vec!["greeting".into(), "question".into()],
                scores: vec![0.2, 0.8],
            },
        )
        .unwrap();
        assert_eq!(ranking.labels, vec!["question", "greeting"]);
        assert_eq!(ranking.scores, vec![0.8, 0.2]);

        let mismatched = into_ranking(
            "m",
            ZeroShotResponse {
                labels: vec!["question".into()],
                scores: vec![],
            },
        );
        assert!(mismatched.is_err());
    }

    #[tokio::test]
    async fn test_sentiment_against_stub_server() {
        let router = Router::new().route(
            "/models/*model",
            post(|Path(model): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(model, "distilbert-sst2");
                assert_eq!(headers["authorization"], "Bearer secret");
                assert_eq!(body["inputs"], "what a day");
                assert_eq!(body["options"]["wait_for_model"], true);
                assert!(body.get("parameters").is_none());
                Json(json!([[{"label": "POSITIVE", "score": 0.88}, {"label": "NEGATIVE", "score": 0.12}]]))
            }),
        );
        let base_url = spawn_stub(router).await;

        let classifier = HfSentimentClassifier::new(client(&base_url, Some("secret")), "distilbert-sst2");
        let output = classifier.classify("what a day").await.unwrap();

        assert_eq!(output.label, "POSITIVE");
        assert_eq!(output.score, 0.88);
        assert_eq!(classifier.model_id(), "distilbert-sst2");
    }

    #[tokio::test]
    async fn test_zero_shot_against_stub_server() {
        let router = Router::new().route(
            "/models/*model",
            post(|Path(model): Path<String>, Json(body): Json<Value>| async move {
                assert_eq!(model, "facebook/bart-large-mnli");
                let labels = body["parameters"]["candidate_labels"].clone();
                assert_eq!(labels, json!(["greeting", "question"]));
                Json(json!({
                    "sequence": body["inputs"],
                    "labels": ["question", "greeting"],
                    "scores": [0.7, 0.3]
                }))
            }),
        );
        let base_url = spawn_stub(router).await;

        let classifier = HfZeroShotClassifier::new(client(&format!("{}/", base_url), None), "facebook/bart-large-mnli");
        let labels = vec!["greeting".to_string(), "question".to_string()];
        let ranking = classifier.classify("how are you?", &labels).await.unwrap();

        assert_eq!(ranking.top_label(), Some("question"));
    }

    #[tokio::test]
    async fn test_error_status_becomes_external_service_error() {
        let router = Router::new().route(
            "/models/*model",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": "Model is currently loading"})),
                )
            }),
        );
        let base_url = spawn_stub(router).await;

        let classifier = HfSentimentClassifier::new(client(&base_url, None), "slow-model");
        let err = classifier.classify("hello").await.unwrap_err();

        match err {
            DomainError::ExternalService(detail) => {
                assert!(detail.contains("slow-model returned 503"));
                assert!(detail.contains("currently loading"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
