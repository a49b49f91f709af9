use async_trait::async_trait;
use chrono::NaiveDate;

use super::types::ExtractionEnvelope;

/// Interface for a structured-extraction provider. The current date rides
/// along so the provider can resolve relative phrases like "kal".
#[async_trait]
pub trait ExtractionInterface: Send + Sync {
    async fn extract(
        &self,
        transcript: &str,
        today: NaiveDate,
    ) -> Result<ExtractionEnvelope, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("empty response: {0}")]
    EmptyResponse(String),
    #[error("malformed output: {0}")]
    MalformedOutput(String),
}
