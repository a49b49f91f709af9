use std::sync::Arc;

use anyhow::Result;

use crate::asr::{TranscriberFactory, TranscriptionInterface};
use crate::config::Config;
use crate::intent::{ExtractionInterface, ExtractorFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub transcriber: Arc<dyn TranscriptionInterface>,
    pub extractor: Arc<dyn ExtractionInterface>,
}

impl AppState {
    /// Build the shared state. Provider clients are constructed once here and
    /// injected everywhere else.
    pub fn new(config: Config) -> Result<Self> {
        let transcriber = TranscriberFactory::create(&config.asr)?;
        let extractor = ExtractorFactory::create(&config.extraction)?;

        Ok(Self {
            config,
            transcriber,
            extractor,
        })
    }

    /// State with caller-supplied provider clients, for substituting fakes.
    pub fn with_providers(
        config: Config,
        transcriber: Arc<dyn TranscriptionInterface>,
        extractor: Arc<dyn ExtractionInterface>,
    ) -> Self {
        Self {
            config,
            transcriber,
            extractor,
        }
    }
}
