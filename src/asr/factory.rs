use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::groq_whisper::GroqWhisperEngine;
use super::interface::TranscriptionInterface;
use crate::config::AsrConfig;

/// Factory for creating transcription engines
pub struct TranscriberFactory;

impl TranscriberFactory {
    /// Create a transcription engine based on the configured provider.
    pub fn create(config: &AsrConfig) -> Result<Arc<dyn TranscriptionInterface>> {
        info!("Initializing transcription engine: {}", config.provider);

        match config.provider.as_str() {
            // Groq exposes the OpenAI transcriptions contract; the base URL
            // decides which of the two is actually called.
            "groq_whisper" | "openai_whisper" => Ok(Arc::new(GroqWhisperEngine::new(config)?)),
            other => Err(anyhow::anyhow!(
                "Unsupported transcription provider: {}",
                other
            )),
        }
    }
}
