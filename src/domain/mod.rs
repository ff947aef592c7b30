mod audio_payload;
mod transcription;

pub use audio_payload::{AudioPayload, DEFAULT_SUFFIX};
pub use transcription::{AudioOrigin, Transcript, TranscriptionRecord};
