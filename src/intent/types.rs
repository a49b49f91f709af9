use serde::{Deserialize, Serialize};

use super::interface::ExtractionError;

/// Structured action extracted from one transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRecord {
    pub action: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub time: Option<String>,

    #[serde(rename = "get_summary")]
    pub summary: String,
}

impl IntentRecord {
    /// Sentinel action for utterances with no actionable request.
    pub const NO_ACTION: &'static str = "none";

    pub fn is_actionable(&self) -> bool {
        self.action != Self::NO_ACTION
    }
}

/// Full structured response from the extraction provider: the transcript
/// normalized into Latin-script Hinglish plus the nested intent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionEnvelope {
    pub normalized_text: String,
    pub intent: IntentRecord,
}

impl ExtractionEnvelope {
    /// Parse provider output. Output that is not well-formed JSON of this
    /// shape (including a missing `intent` key) is malformed, not tolerated.
    pub fn parse(raw: &str) -> Result<Self, ExtractionError> {
        serde_json::from_str(raw)
            .map_err(|e| ExtractionError::MalformedOutput(format!("invalid intent JSON: {}", e)))
    }
}
