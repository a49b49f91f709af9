use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::{ExtractionError, ExtractionInterface};
use super::prompt;
use super::types::ExtractionEnvelope;
use crate::config::ExtractionConfig;

/// Structured-extraction client for the Gemini generateContent API,
/// configured for JSON-only output.
pub struct GeminiExtractor {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiExtractor {
    pub fn new(config: &ExtractionConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ExtractionInterface for GeminiExtractor {
    async fn extract(
        &self,
        transcript: &str,
        today: NaiveDate,
    ) -> Result<ExtractionEnvelope, ExtractionError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = json!({
            "system_instruction": {
                "parts": [{ "text": prompt::system_instruction(today) }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt::user_prompt(transcript) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        });

        debug!(model = %self.model, chars = transcript.len(), "Sending transcript to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ExtractionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ExtractionError::ApiRequestFailed(format!("body: {}", e)))?;

        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                ExtractionError::EmptyResponse("no candidate text in response".to_string())
            })?;

        let envelope = ExtractionEnvelope::parse(text)?;

        info!(action = %envelope.intent.action, "Intent extraction completed");

        Ok(envelope)
    }
}
