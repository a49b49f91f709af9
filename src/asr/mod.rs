pub mod factory;
pub mod groq_whisper;
pub mod interface;

pub use factory::TranscriberFactory;
pub use groq_whisper::GroqWhisperEngine;
pub use interface::{AsrError, TranscriptionInterface};
