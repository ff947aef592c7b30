use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcript;

/// Engine binding for an OpenAI-compatible `/audio/transcriptions` endpoint.
///
/// The staged file is read back into memory and shipped as a multipart form.
/// `verbose_json` is requested so the detected language comes back with the
/// text.
pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct VerboseTranscription {
    text: String,
    language: Option<String>,
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError> {
        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::ReadFailed(e.to_string()))?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .part("file", multipart::Part::bytes(audio).file_name(file_name));

        let url = format!("{}/audio/transcriptions", self.base_url);
        tracing::debug!(model = %self.model, "Sending staged audio to Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::EngineFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: VerboseTranscription = response
            .json()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(
            chars = parsed.text.len(),
            "Whisper API transcription completed"
        );

        Ok(Transcript {
            text: parsed.text.trim().to_string(),
            language: parsed.language,
        })
    }
}
