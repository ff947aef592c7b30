/// Raw output of a transcription engine. The language is optional because
/// not every backend reports one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub language: Option<String>,
}

/// Where the audio behind a transcription came from. Upload size and source
/// URL are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOrigin {
    Upload { size_bytes: u64 },
    RemoteUrl { url: String },
}

/// Finished transcription for one request. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRecord {
    pub text: String,
    pub language: String,
    pub origin: AudioOrigin,
}

impl TranscriptionRecord {
    pub fn new(transcript: Transcript, origin: AudioOrigin) -> Self {
        Self {
            text: transcript.text,
            language: transcript
                .language
                .unwrap_or_else(|| "unknown".to_string()),
            origin,
        }
    }
}
