use std::path::Path;

use bytes::Bytes;

/// Storage suffix used when the client gave us no usable filename. Remote
/// fetches always default here, since the URL path is not trusted for type
/// inference.
pub const DEFAULT_SUFFIX: &str = ".mp3";

/// A complete audio payload received from a client, together with the
/// filename hint it arrived with. Lives only until it has been staged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    bytes: Bytes,
    filename: Option<String>,
}

impl AudioPayload {
    pub fn new(bytes: Bytes, filename: Option<String>) -> Self {
        Self { bytes, filename }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Storage suffix inferred from the filename extension, falling back to
    /// [`DEFAULT_SUFFIX`].
    pub fn suffix(&self) -> String {
        self.filename
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{ext}"))
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
    }
}
