use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use dhwani_backend::asr::{AsrError, GroqWhisperEngine, TranscriptionInterface};
use dhwani_backend::config::AsrConfig;

async fn start_mock_groq_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn engine_for(base_url: &str) -> GroqWhisperEngine {
    let config = AsrConfig {
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        ..AsrConfig::default()
    };
    GroqWhisperEngine::new(&config).unwrap()
}

#[tokio::test]
async fn given_valid_audio_bytes_when_groq_transcribes_then_returns_text() {
    let response_body = r#"{"text": "kal ki meeting postpone kar do"}"#;
    let (base_url, shutdown_tx) = start_mock_groq_server(200, response_body).await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"fake audio bytes", "clip.webm").await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "kal ki meeting postpone kar do");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_groq_api_returns_error_status_when_transcribing_then_returns_api_error() {
    let response_body = r#"{"error": {"message": "invalid audio"}}"#;
    let (base_url, shutdown_tx) = start_mock_groq_server(400, response_body).await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"bad audio", "clip.webm").await;

    assert!(matches!(result, Err(AsrError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_groq_api_returns_non_json_body_when_transcribing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_groq_server(200, "not json at all").await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"fake audio bytes", "clip.webm").await;

    assert!(matches!(result, Err(AsrError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_surrounding_whitespace_in_transcript_then_text_is_trimmed() {
    let response_body = r#"{"text": "  namaste ji  "}"#;
    let (base_url, shutdown_tx) = start_mock_groq_server(200, response_body).await;

    let engine = engine_for(&base_url);
    let result = engine.transcribe(b"fake audio bytes", "clip.webm").await;

    assert_eq!(result.unwrap(), "namaste ji");
    shutdown_tx.send(()).ok();
}
