use std::io;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;

use susurro::application::ports::{
    AudioFetcher, FetchError, TranscriptionEngine, TranscriptionError,
};
use susurro::application::services::{TranscribeError, TranscriptionService};
use susurro::application::staging::AudioStager;
use susurro::domain::{AudioOrigin, AudioPayload, Transcript};

struct StaticEngine {
    language: Option<&'static str>,
}

#[async_trait]
impl TranscriptionEngine for StaticEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<Transcript, TranscriptionError> {
        Ok(Transcript {
            text: "buenos dias".to_string(),
            language: self.language.map(str::to_string),
        })
    }
}

struct RejectingEngine;

#[async_trait]
impl TranscriptionEngine for RejectingEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<Transcript, TranscriptionError> {
        Err(TranscriptionError::EngineFailed("corrupt header".to_string()))
    }
}

struct StaticFetcher;

#[async_trait]
impl AudioFetcher for StaticFetcher {
    async fn fetch(
        &self,
        _url: &str,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, FetchError> {
        Ok(
            futures::stream::once(async { Ok::<_, io::Error>(Bytes::from_static(b"remote")) })
                .boxed(),
        )
    }
}

struct RefusingFetcher;

#[async_trait]
impl AudioFetcher for RefusingFetcher {
    async fn fetch(
        &self,
        _url: &str,
    ) -> Result<BoxStream<'static, Result<Bytes, io::Error>>, FetchError> {
        Err(FetchError::RequestFailed("connection refused".to_string()))
    }
}

fn service(
    engine: Arc<dyn TranscriptionEngine>,
    fetcher: Arc<dyn AudioFetcher>,
    spool_dir: &Path,
) -> TranscriptionService {
    TranscriptionService::new(engine, fetcher, AudioStager::new(spool_dir).unwrap())
}

fn spool_is_empty(spool_dir: &Path) -> bool {
    std::fs::read_dir(spool_dir).unwrap().next().is_none()
}

#[tokio::test]
async fn given_empty_payload_when_upload_then_empty_input_before_staging() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(
        Arc::new(StaticEngine { language: None }),
        Arc::new(RefusingFetcher),
        dir.path(),
    );

    let result = svc
        .transcribe_upload(AudioPayload::new(Bytes::new(), None))
        .await;

    assert!(matches!(result, Err(TranscribeError::EmptyInput)));
    assert!(spool_is_empty(dir.path()));
}

#[tokio::test]
async fn given_upload_when_transcribed_then_origin_carries_size() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(
        Arc::new(StaticEngine {
            language: Some("es"),
        }),
        Arc::new(RefusingFetcher),
        dir.path(),
    );

    let record = svc
        .transcribe_upload(AudioPayload::new(
            Bytes::from_static(b"0123456789"),
            Some("greeting.m4a".to_string()),
        ))
        .await
        .unwrap();

    assert_eq!(record.text, "buenos dias");
    assert_eq!(record.language, "es");
    assert_eq!(record.origin, AudioOrigin::Upload { size_bytes: 10 });
    assert!(spool_is_empty(dir.path()));
}

#[tokio::test]
async fn given_engine_without_language_when_transcribed_then_language_is_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(
        Arc::new(StaticEngine { language: None }),
        Arc::new(RefusingFetcher),
        dir.path(),
    );

    let record = svc
        .transcribe_upload(AudioPayload::new(Bytes::from_static(b"x"), None))
        .await
        .unwrap();

    assert_eq!(record.language, "unknown");
}

#[tokio::test]
async fn given_rejecting_engine_when_upload_then_classified_and_cleaned_up() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(
        Arc::new(RejectingEngine),
        Arc::new(RefusingFetcher),
        dir.path(),
    );

    let result = svc
        .transcribe_upload(AudioPayload::new(Bytes::from_static(b"noise"), None))
        .await;

    match result {
        Err(TranscribeError::Transcription(e)) => {
            assert!(e.to_string().contains("corrupt header"));
        }
        other => panic!("expected a transcription error, got {other:?}"),
    }
    assert!(spool_is_empty(dir.path()));
}

#[tokio::test]
async fn given_failing_fetch_when_url_then_fetch_error_and_nothing_staged() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(
        Arc::new(StaticEngine { language: None }),
        Arc::new(RefusingFetcher),
        dir.path(),
    );

    let result = svc.transcribe_url("https://example.com/a.mp3").await;

    assert!(matches!(result, Err(TranscribeError::Fetch(_))));
    assert!(spool_is_empty(dir.path()));
}

#[tokio::test]
async fn given_remote_audio_when_url_then_origin_carries_url() {
    let dir = tempfile::tempdir().unwrap();
    let svc = service(
        Arc::new(StaticEngine {
            language: Some("es"),
        }),
        Arc::new(StaticFetcher),
        dir.path(),
    );

    let record = svc
        .transcribe_url("https://example.com/audio.mp3")
        .await
        .unwrap();

    assert_eq!(
        record.origin,
        AudioOrigin::RemoteUrl {
            url: "https://example.com/audio.mp3".to_string()
        }
    );
    assert!(spool_is_empty(dir.path()));
}
