use std::io;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

/// Remote retrieval of an audio payload as a chunked byte stream.
#[async_trait]
pub trait AudioFetcher: Send + Sync {
    /// Issues a GET for `url` and returns the response body as a stream of
    /// chunks. Must fail before yielding the stream when the server answers
    /// with a non-success status.
    async fn fetch(
        &self,
        url: &str,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unexpected status {0}")]
    UnexpectedStatus(String),
}
