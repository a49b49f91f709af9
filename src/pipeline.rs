use chrono::Local;
use serde::Serialize;
use std::time::Instant;
use tracing::debug;

use crate::error::TrialError;
use crate::intent::IntentRecord;
use crate::state::AppState;
use crate::upload::TempAudioFile;

/// Assembled response for one successful trial request.
#[derive(Debug, Serialize)]
pub struct TrialOutcome {
    pub status: &'static str,
    pub latency_ms: u64,
    /// Normalized Latin-script Hinglish transcript.
    pub transcription: String,
    /// Raw provider transcript, retained for diagnostics.
    pub original_transcription: String,
    pub intent: IntentRecord,
}

/// Run the per-request pipeline: transcribe the stored audio, extract the
/// intent, assemble the outcome. The two provider calls are strictly
/// sequential; the caller owns the temp file and its cleanup.
pub async fn run_trial(
    state: &AppState,
    audio: &TempAudioFile,
    started: Instant,
) -> Result<TrialOutcome, TrialError> {
    let audio_bytes = tokio::fs::read(audio.path())
        .await
        .map_err(|e| TrialError::TranscriptionFailed(format!("reading stored audio: {}", e)))?;

    let transcript = state
        .transcriber
        .transcribe(&audio_bytes, audio.original_name())
        .await?;

    debug!(transcript = %transcript, "Transcription stage complete");

    let today = Local::now().date_naive();
    let envelope = state.extractor.extract(&transcript, today).await?;

    Ok(TrialOutcome {
        status: "success",
        latency_ms: started.elapsed().as_millis() as u64,
        transcription: envelope.normalized_text,
        original_transcription: transcript,
        intent: envelope.intent,
    })
}
