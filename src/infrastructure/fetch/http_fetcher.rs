use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::application::ports::{AudioFetcher, FetchError};

/// `reqwest`-backed fetcher that streams a remote audio file chunk by chunk.
pub struct HttpAudioFetcher {
    client: reqwest::Client,
}

impl HttpAudioFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpAudioFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioFetcher for HttpAudioFetcher {
    async fn fetch(
        &self,
        url: &str,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = %status, "Remote fetch rejected");
            return Err(FetchError::UnexpectedStatus(status.to_string()));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(io::Error::other))
            .boxed();

        Ok(stream)
    }
}
