use std::sync::Arc;

use crate::application::ports::{
    AudioFetcher, FetchError, TranscriptionEngine, TranscriptionError,
};
use crate::application::staging::{AudioStager, StagingError};
use crate::domain::{AudioOrigin, AudioPayload, DEFAULT_SUFFIX, TranscriptionRecord};

/// Runs the request-to-transcription pipeline: acquire a payload, stage it
/// on local storage, invoke the engine exactly once, and release the staged
/// file on every exit path.
pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
    fetcher: Arc<dyn AudioFetcher>,
    stager: AudioStager,
}

impl TranscriptionService {
    pub fn new(
        engine: Arc<dyn TranscriptionEngine>,
        fetcher: Arc<dyn AudioFetcher>,
        stager: AudioStager,
    ) -> Self {
        Self {
            engine,
            fetcher,
            stager,
        }
    }

    /// Transcribes a payload that arrived in the request body. An empty
    /// payload is rejected before anything touches the filesystem.
    pub async fn transcribe_upload(
        &self,
        payload: AudioPayload,
    ) -> Result<TranscriptionRecord, TranscribeError> {
        if payload.is_empty() {
            return Err(TranscribeError::EmptyInput);
        }

        let size_bytes = payload.len();
        let suffix = payload.suffix();
        let staged = self.stager.stage_bytes(payload.bytes(), &suffix).await?;

        let transcript = self
            .engine
            .transcribe(staged.path())
            .await
            .map_err(TranscribeError::Transcription)?;

        tracing::info!(
            bytes = size_bytes,
            language = transcript.language.as_deref().unwrap_or("unknown"),
            "Upload transcribed"
        );

        Ok(TranscriptionRecord::new(
            transcript,
            AudioOrigin::Upload { size_bytes },
        ))
    }

    /// Fetches a remote audio file and transcribes it. The remote body is
    /// streamed chunk by chunk straight into the staged file.
    pub async fn transcribe_url(
        &self,
        url: &str,
    ) -> Result<TranscriptionRecord, TranscribeError> {
        let stream = self
            .fetcher
            .fetch(url)
            .await
            .map_err(TranscribeError::Fetch)?;

        let (staged, bytes_fetched) = self.stager.stage_stream(stream, DEFAULT_SUFFIX).await?;
        tracing::debug!(url, bytes = bytes_fetched, "Remote audio staged");

        let transcript = self
            .engine
            .transcribe(staged.path())
            .await
            .map_err(TranscribeError::Transcription)?;

        tracing::info!(
            url,
            language = transcript.language.as_deref().unwrap_or("unknown"),
            "Remote audio transcribed"
        );

        Ok(TranscriptionRecord::new(
            transcript,
            AudioOrigin::RemoteUrl {
                url: url.to_string(),
            },
        ))
    }
}

/// Classified pipeline failure. Every error raised below the orchestrator is
/// folded into one of these categories before it reaches the transport layer.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("the audio payload is empty")]
    EmptyInput,
    #[error("could not download the file: {0}")]
    Fetch(FetchError),
    #[error("could not transcribe the audio: {0}")]
    Transcription(TranscriptionError),
    #[error("could not process the file: {0}")]
    Processing(String),
}

impl TranscribeError {
    /// Short category message for the `error` field of an error response.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::EmptyInput => "the file is empty",
            Self::Fetch(_) => "could not download the file",
            Self::Transcription(_) => "could not transcribe the audio",
            Self::Processing(_) => "could not process the file",
        }
    }

    /// The underlying failure, verbatim, as a string.
    pub fn detail(&self) -> String {
        match self {
            Self::EmptyInput => "the payload contained zero bytes".to_string(),
            Self::Fetch(e) => e.to_string(),
            Self::Transcription(e) => e.to_string(),
            Self::Processing(detail) => detail.clone(),
        }
    }

    /// Fixed remediation hint surfaced alongside the error.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::EmptyInput => "make sure the audio file contains data",
            Self::Fetch(_) => "verify that the URL is reachable and points to an audio file",
            Self::Transcription(_) => "ensure the audio file is not corrupted and is valid",
            Self::Processing(_) => "verify that the file/URL is valid and can be read correctly",
        }
    }
}

impl From<StagingError> for TranscribeError {
    fn from(err: StagingError) -> Self {
        match err {
            // A failing source stream is a remote-transfer failure, not a
            // local one.
            StagingError::Source(e) => Self::Fetch(FetchError::RequestFailed(e.to_string())),
            StagingError::Write(e) => Self::Processing(e.to_string()),
        }
    }
}
