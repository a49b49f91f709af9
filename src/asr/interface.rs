use async_trait::async_trait;

/// Interface for a speech-to-text provider. One attempt per call, no retry;
/// the uploader is waiting synchronously on the result.
#[async_trait]
pub trait TranscriptionInterface: Send + Sync {
    async fn transcribe(&self, audio: &[u8], file_name: &str) -> Result<String, AsrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AsrError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
