use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;

use dhwani_backend::config::Config;
use dhwani_backend::routes;
use dhwani_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dhwani_backend=debug,tower_http=debug")
        .init();

    // Load configuration - CONFIG_PATH first, then the local conf.yaml,
    // falling back to defaults with environment overrides.
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                info!("Loaded configuration from: {}", path);
                config = Some(cfg);
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    let config = config.unwrap_or_else(|| {
        info!("No config file found, using defaults with environment overrides");
        Config::from_env()
    });

    // Ensure the uploads directory exists before the first request lands
    std::fs::create_dir_all(&config.system.uploads_dir)?;
    info!("Initialized uploads directory: {}", config.system.uploads_dir);

    let app_state = AppState::new(config.clone())?;
    let app = routes::create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.system.host, config.system.port).parse()?;
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
