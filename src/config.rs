use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,

    #[serde(default)]
    pub asr: AsrConfig,

    #[serde(default)]
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

/// Configuration for the speech-to-text provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsrConfig {
    #[serde(default = "default_asr_provider")]
    pub provider: String,

    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_asr_model")]
    pub model: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_asr_base_url")]
    pub base_url: String,

    #[serde(rename = "request_timeout_secs")]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_asr_provider() -> String {
    "groq_whisper".to_string()
}

fn default_asr_model() -> String {
    "whisper-large-v3".to_string()
}

fn default_asr_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Configuration for the structured-extraction provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_extraction_provider")]
    pub provider: String,

    #[serde(rename = "api_key")]
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_extraction_model")]
    pub model: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_extraction_base_url")]
    pub base_url: String,

    #[serde(rename = "request_timeout_secs")]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_extraction_provider() -> String {
    "gemini".to_string()
}

fn default_extraction_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_extraction_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        let mut config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            self.asr.api_key = key;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.extraction.api_key = key;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.system.port = port;
            }
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            uploads_dir: default_uploads_dir(),
        }
    }
}

impl Default for AsrConfig {
    fn default() -> Self {
        Self {
            provider: default_asr_provider(),
            api_key: String::new(),
            model: default_asr_model(),
            base_url: default_asr_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            provider: default_extraction_provider(),
            api_key: String::new(),
            model: default_extraction_model(),
            base_url: default_extraction_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
