use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::asr::AsrError;
use crate::intent::ExtractionError;

/// Failure taxonomy for the trial pipeline. Each variant maps to one
/// outbound error category; upstream messages ride along as details.
#[derive(Debug, thiserror::Error)]
pub enum TrialError {
    #[error("no audio file supplied")]
    NoAudioSupplied,

    #[error("failed to store upload: {0}")]
    UploadStoreFailed(String),

    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("intent extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("extraction returned malformed output: {0}")]
    ExtractionMalformed(String),
}

impl TrialError {
    pub fn category(&self) -> &'static str {
        match self {
            TrialError::NoAudioSupplied => "NoAudioSupplied",
            TrialError::UploadStoreFailed(_) => "UploadStoreFailed",
            TrialError::TranscriptionFailed(_) => "TranscriptionFailed",
            TrialError::ExtractionFailed(_) => "ExtractionFailed",
            TrialError::ExtractionMalformed(_) => "ExtractionMalformed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            TrialError::NoAudioSupplied => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AsrError> for TrialError {
    fn from(err: AsrError) -> Self {
        TrialError::TranscriptionFailed(err.to_string())
    }
}

impl From<ExtractionError> for TrialError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::MalformedOutput(msg) => TrialError::ExtractionMalformed(msg),
            other => TrialError::ExtractionFailed(other.to_string()),
        }
    }
}

impl IntoResponse for TrialError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "error": self.category(),
            "details": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
