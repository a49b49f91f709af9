use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use super::gemini_extractor::GeminiExtractor;
use super::interface::ExtractionInterface;
use crate::config::ExtractionConfig;

/// Factory for creating extraction clients
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create an extraction client based on the configured provider.
    pub fn create(config: &ExtractionConfig) -> Result<Arc<dyn ExtractionInterface>> {
        info!("Initializing extraction client: {}", config.provider);

        match config.provider.as_str() {
            "gemini" => Ok(Arc::new(GeminiExtractor::new(config)?)),
            other => Err(anyhow::anyhow!("Unsupported extraction provider: {}", other)),
        }
    }
}
