use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tokio::process::Command;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcript;

/// Engine binding that shells out to a whisper.cpp-style CLI.
///
/// One process per request, so concurrent invocations are naturally
/// isolated. The CLI writes its JSON report next to the staged file; the
/// report is removed once parsed.
pub struct WhisperCliEngine {
    binary: PathBuf,
    model: PathBuf,
}

impl WhisperCliEngine {
    pub fn new(binary: PathBuf, model: PathBuf) -> Result<Self, TranscriptionError> {
        if !model.exists() {
            return Err(TranscriptionError::ModelLoadFailed(format!(
                "model file not found: {}",
                model.display()
            )));
        }
        Ok(Self { binary, model })
    }
}

#[derive(Deserialize)]
struct CliReport {
    result: CliResult,
    transcription: Vec<CliSegment>,
}

#[derive(Deserialize)]
struct CliResult {
    language: Option<String>,
}

#[derive(Deserialize)]
struct CliSegment {
    text: String,
}

#[async_trait]
impl TranscriptionEngine for WhisperCliEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<Transcript, TranscriptionError> {
        tracing::debug!(
            binary = %self.binary.display(),
            audio = %audio_path.display(),
            "Spawning whisper CLI"
        );

        let output = Command::new(&self.binary)
            .arg("-m")
            .arg(&self.model)
            .arg("-f")
            .arg(audio_path)
            .arg("-l")
            .arg("auto")
            .arg("-oj")
            .arg("-of")
            .arg(audio_path)
            .arg("-np")
            .output()
            .await
            .map_err(|e| {
                TranscriptionError::EngineFailed(format!(
                    "failed to run {}: {}",
                    self.binary.display(),
                    e
                ))
            })?;

        // The CLI appends ".json" to the -of prefix.
        let report_path = PathBuf::from(format!("{}.json", audio_path.display()));
        let report = fs::read_to_string(&report_path).await;
        let _ = fs::remove_file(&report_path).await;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TranscriptionError::EngineFailed(format!(
                "exit {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let report = report.map_err(|e| {
            TranscriptionError::EngineFailed(format!("missing transcript report: {}", e))
        })?;
        let parsed: CliReport = serde_json::from_str(&report).map_err(|e| {
            TranscriptionError::EngineFailed(format!("malformed transcript report: {}", e))
        })?;

        let text = parsed
            .transcription
            .iter()
            .map(|segment| segment.text.as_str())
            .collect::<String>()
            .trim()
            .to_string();

        Ok(Transcript {
            text,
            language: parsed.result.language,
        })
    }
}
