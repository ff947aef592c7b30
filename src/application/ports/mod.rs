mod audio_fetcher;
mod transcription_engine;

pub use audio_fetcher::{AudioFetcher, FetchError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
