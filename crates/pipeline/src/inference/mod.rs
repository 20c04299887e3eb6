//! HTTP inference clients
//!
//! Speaks the hosted-inference convention: `POST {endpoint}/models/{model}`
//! with `{"inputs": ...}` for text tasks and raw WAV bytes for speech
//! recognition, bearer-token auth when a key is configured.

mod classifier;
mod sentiment;
mod stt;
mod tts;

pub use classifier::HttpIntentClassifier;
pub use sentiment::HttpSentimentScorer;
pub use stt::HttpTranscriber;
pub use tts::HttpSynthesizer;

use aurora_ivr_config::ServicesConfig;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{PipelineError, ServiceKind};

/// Shared HTTP client for all inference services
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl InferenceClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PipelineError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_settings(services: &ServicesConfig) -> Result<Self, PipelineError> {
        Self::new(
            services.endpoint.clone(),
            services.api_key.clone(),
            services.timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.endpoint, model)
    }

    async fn send(
        &self,
        service: ServiceKind,
        request: RequestBuilder,
    ) -> Result<Response, PipelineError> {
        let request = match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(service = %service, error = %e, "Inference request failed");
            PipelineError::Unreachable {
                service,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(service = %service, status = status.as_u16(), "Inference service error");
            return Err(PipelineError::Status {
                service,
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        service: ServiceKind,
        response: Response,
    ) -> Result<T, PipelineError> {
        response
            .json::<T>()
            .await
            .map_err(|e| PipelineError::Response {
                service,
                message: e.to_string(),
            })
    }

    /// Text task: JSON in, JSON out
    pub async fn post_inputs<T: DeserializeOwned>(
        &self,
        service: ServiceKind,
        model: &str,
        inputs: &str,
    ) -> Result<T, PipelineError> {
        let request = self
            .client
            .post(self.model_url(model))
            .json(&TextInputs { inputs });
        let response = self.send(service, request).await?;
        Self::decode(service, response).await
    }

    /// Speech recognition: WAV bytes in, JSON out
    pub async fn post_wav<T: DeserializeOwned>(
        &self,
        service: ServiceKind,
        model: &str,
        wav: Vec<u8>,
    ) -> Result<T, PipelineError> {
        let request = self
            .client
            .post(self.model_url(model))
            .header(reqwest::header::CONTENT_TYPE, "audio/wav")
            .body(wav);
        let response = self.send(service, request).await?;
        Self::decode(service, response).await
    }

    /// Speech synthesis: JSON in, WAV bytes out
    pub async fn post_inputs_for_audio(
        &self,
        service: ServiceKind,
        model: &str,
        inputs: &str,
    ) -> Result<Vec<u8>, PipelineError> {
        let request = self
            .client
            .post(self.model_url(model))
            .header(reqwest::header::ACCEPT, "audio/wav")
            .json(&TextInputs { inputs });
        let response = self.send(service, request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| PipelineError::Response {
                service,
                message: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }
}

#[derive(Serialize)]
struct TextInputs<'a> {
    inputs: &'a str,
}

/// One scored label from a classification model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Classification output, either batched (`[[...]]`) or flat (`[...]`)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ClassificationResponse {
    Batched(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl ClassificationResponse {
    /// Scores for the single input, highest first
    pub(crate) fn into_ranked(self) -> Vec<LabelScore> {
        let mut scores = match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(scores) => scores,
        };
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_shapes() {
        let batched: ClassificationResponse = serde_json::from_str(
            r#"[[{"label":"NEGATIVE","score":0.2},{"label":"POSITIVE","score":0.8}]]"#,
        )
        .unwrap();
        let ranked = batched.into_ranked();
        assert_eq!(ranked[0].label, "POSITIVE");

        let flat: ClassificationResponse =
            serde_json::from_str(r#"[{"label":"LABEL_0","score":0.51}]"#).unwrap();
        assert_eq!(flat.into_ranked()[0].label, "LABEL_0");

        let empty: ClassificationResponse = serde_json::from_str("[[]]").unwrap();
        assert!(empty.into_ranked().is_empty());
    }

    #[test]
    fn test_model_url() {
        let client = InferenceClient::new(
            "http://localhost:8000/",
            None,
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            client.model_url("openai/whisper-base"),
            "http://localhost:8000/models/openai/whisper-base"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // bind for a free port, then release it so nothing is listening
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let base = format!("http://127.0.0.1:{port}");
        let client = InferenceClient::new(base, None, Duration::from_secs(2)).unwrap();
        let err = client
            .post_inputs::<serde_json::Value>(ServiceKind::Sentiment, "m", "hi")
            .await
            .unwrap_err();
        assert!(err.is_unavailable());
    }
}
