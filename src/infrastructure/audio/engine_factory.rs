use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

use super::openai_whisper_engine::OpenAiWhisperEngine;
use super::whisper_cli_engine::WhisperCliEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineProvider {
    OpenAi,
    WhisperCli,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: EngineProvider,
        model: &str,
        api_key: Option<String>,
        base_url: Option<String>,
        binary: Option<PathBuf>,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        match provider {
            EngineProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::ModelLoadFailed(
                        "API key required for the OpenAI Whisper engine".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(key, base_url, Some(model.to_string()));
                Ok(Arc::new(engine))
            }
            EngineProvider::WhisperCli => {
                let binary = binary.unwrap_or_else(|| PathBuf::from("whisper-cli"));
                let engine = WhisperCliEngine::new(binary, PathBuf::from(model))?;
                Ok(Arc::new(engine))
            }
        }
    }
}
