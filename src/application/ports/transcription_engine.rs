use std::path::Path;

use async_trait::async_trait;

use crate::domain::Transcript;

/// Speech-to-text backend invoked once per request with the path of a staged
/// audio file.
///
/// The engine handle is built once at startup and shared across in-flight
/// requests. Implementations must be safe to call concurrently; a backend
/// that is not internally thread-safe has to serialize `transcribe` behind
/// its own lock.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("could not read staged audio: {0}")]
    ReadFailed(String),
    #[error("transcription failed: {0}")]
    EngineFailed(String),
    #[error("model loading failed: {0}")]
    ModelLoadFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
