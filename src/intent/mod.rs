pub mod factory;
pub mod gemini_extractor;
pub mod interface;
pub mod prompt;
pub mod types;

pub use factory::ExtractorFactory;
pub use gemini_extractor::GeminiExtractor;
pub use interface::{ExtractionError, ExtractionInterface};
pub use types::{ExtractionEnvelope, IntentRecord};
