use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Writes audio payloads to uniquely named files under a spool directory so
/// the transcription engine can read them by path. Names are UUID-derived,
/// so concurrent requests never collide.
#[derive(Debug, Clone)]
pub struct AudioStager {
    spool_dir: PathBuf,
}

impl AudioStager {
    pub fn new(spool_dir: impl Into<PathBuf>) -> Result<Self, StagingError> {
        let spool_dir = spool_dir.into();
        std::fs::create_dir_all(&spool_dir).map_err(StagingError::Write)?;
        Ok(Self { spool_dir })
    }

    fn allocate(&self, suffix: &str) -> PathBuf {
        self.spool_dir.join(format!("{}{}", Uuid::new_v4(), suffix))
    }

    /// Stages a payload that is already fully in memory.
    pub async fn stage_bytes(
        &self,
        data: &[u8],
        suffix: &str,
    ) -> Result<StagedAudio, StagingError> {
        let staged = StagedAudio::new(self.allocate(suffix));
        fs::write(staged.path(), data)
            .await
            .map_err(StagingError::Write)?;
        Ok(staged)
    }

    /// Stages a payload arriving as a byte stream, writing each chunk as it
    /// lands. Returns the guard together with the number of bytes written.
    /// A partially written file is removed when any chunk or write fails.
    pub async fn stage_stream(
        &self,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        suffix: &str,
    ) -> Result<(StagedAudio, u64), StagingError> {
        let staged = StagedAudio::new(self.allocate(suffix));
        let mut file = fs::File::create(staged.path())
            .await
            .map_err(StagingError::Write)?;

        let mut total_bytes: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(StagingError::Source)?;
            total_bytes += bytes.len() as u64;
            file.write_all(&bytes).await.map_err(StagingError::Write)?;
        }
        file.flush().await.map_err(StagingError::Write)?;

        Ok((staged, total_bytes))
    }
}

/// Owns one staged file for the duration of a single pipeline run. Dropping
/// the guard removes the file, on success and on every failure path alike.
#[derive(Debug)]
pub struct StagedAudio {
    path: PathBuf,
}

impl StagedAudio {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedAudio {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // The response has already been computed at this point, so a
            // failed deletion is logged rather than surfaced.
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove staged audio file"
                );
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("could not write staged file: {0}")]
    Write(#[source] io::Error),
    #[error("source stream failed: {0}")]
    Source(#[source] io::Error),
}
