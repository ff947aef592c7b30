mod engine_factory;
mod openai_whisper_engine;
mod whisper_cli_engine;

pub use engine_factory::{EngineProvider, TranscriptionEngineFactory};
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use whisper_cli_engine::WhisperCliEngine;
