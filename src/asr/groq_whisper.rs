use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use super::interface::{AsrError, TranscriptionInterface};
use crate::config::AsrConfig;

/// Speech-to-text client for Groq's OpenAI-compatible transcriptions
/// endpoint, configured for a multilingual Whisper model.
pub struct GroqWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl GroqWhisperEngine {
    pub fn new(config: &AsrConfig) -> anyhow::Result<Self> {
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
impl TranscriptionInterface for GroqWhisperEngine {
    async fn transcribe(&self, audio: &[u8], file_name: &str) -> Result<String, AsrError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec()).file_name(file_name.to_string());

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", file_part);

        debug!(model = %self.model, bytes = audio.len(), "Sending audio to Groq Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AsrError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AsrError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| AsrError::InvalidResponse(format!("body: {}", e)))?;

        info!(chars = body.text.len(), "Groq Whisper transcription completed");

        Ok(body.text.trim().to_string())
    }
}
