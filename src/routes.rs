use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::error::TrialError;
use crate::pipeline;
use crate::state::AppState;
use crate::upload::TempAudioFile;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/trial", post(trial_handler))
}

/// Full application: routes plus the HTTP middleware stack.
pub fn create_app(state: AppState) -> Router {
    create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Accept one multipart audio upload, run the trial pipeline, and delete the
/// stored file on every exit path past intake.
async fn trial_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let started = Instant::now();

    let audio = match receive_audio(&state, multipart).await {
        Ok(audio) => audio,
        Err(e) => {
            warn!(error = %e, "Trial request rejected at intake");
            return e.into_response();
        }
    };

    let result = pipeline::run_trial(&state, &audio, started).await;

    // Unconditional release of the temp file; failures are logged inside
    // cleanup and never replace the pipeline result.
    audio.cleanup().await;

    match result {
        Ok(outcome) => {
            info!(
                latency_ms = outcome.latency_ms,
                action = %outcome.intent.action,
                "Trial request completed"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => {
            error!(error = %e, category = e.category(), "Trial request failed");
            e.into_response()
        }
    }
}

/// Pull the `audio` field out of the multipart body and store it. Intake must
/// not proceed without a file; no provider is called on this path.
async fn receive_audio(
    state: &AppState,
    mut multipart: Multipart,
) -> Result<TempAudioFile, TrialError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        warn!(error = %e, "Failed to read multipart body");
        TrialError::NoAudioSupplied
    })? {
        if field.name() != Some("audio") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("audio").to_string();

        let bytes = field.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read audio field bytes");
            TrialError::NoAudioSupplied
        })?;

        if bytes.is_empty() {
            return Err(TrialError::NoAudioSupplied);
        }

        return TempAudioFile::store(&state.config.system.uploads_dir, &original_name, &bytes)
            .await;
    }

    Err(TrialError::NoAudioSupplied)
}
