mod health;
mod info;
mod transcribe;

pub use health::health_handler;
pub use info::info_handler;
pub use transcribe::{
    TranscribeErrorResponse, TranscribeUrlRequest, TranscriptionResponse,
    transcribe_upload_handler, transcribe_url_handler,
};
