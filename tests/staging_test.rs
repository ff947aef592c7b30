use std::io;

use bytes::Bytes;
use futures::StreamExt;

use susurro::application::staging::{AudioStager, StagingError};

#[tokio::test]
async fn given_payload_when_staged_then_file_carries_suffix_and_contents() {
    let dir = tempfile::tempdir().unwrap();
    let stager = AudioStager::new(dir.path()).unwrap();

    let staged = stager.stage_bytes(b"audio bytes", ".wav").await.unwrap();

    assert!(staged.path().to_string_lossy().ends_with(".wav"));
    assert_eq!(std::fs::read(staged.path()).unwrap(), b"audio bytes");
}

#[tokio::test]
async fn given_two_stagings_when_allocated_then_paths_never_collide() {
    let dir = tempfile::tempdir().unwrap();
    let stager = AudioStager::new(dir.path()).unwrap();

    let first = stager.stage_bytes(b"one", ".mp3").await.unwrap();
    let second = stager.stage_bytes(b"two", ".mp3").await.unwrap();

    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_staged_file_when_guard_drops_then_file_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let stager = AudioStager::new(dir.path()).unwrap();

    let path = {
        let staged = stager.stage_bytes(b"ephemeral", ".mp3").await.unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());
        path
    };

    assert!(!path.exists());
}

#[tokio::test]
async fn given_chunked_stream_when_staged_then_bytes_accumulate() {
    let dir = tempfile::tempdir().unwrap();
    let stager = AudioStager::new(dir.path()).unwrap();

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from_static(b"abc")),
        Ok(Bytes::from_static(b"defg")),
        Ok(Bytes::from_static(b"h")),
    ];
    let stream = futures::stream::iter(chunks).boxed();

    let (staged, total) = stager.stage_stream(stream, ".mp3").await.unwrap();

    assert_eq!(total, 8);
    assert_eq!(std::fs::read(staged.path()).unwrap(), b"abcdefgh");
}

#[tokio::test]
async fn given_failing_stream_when_staged_then_partial_file_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let stager = AudioStager::new(dir.path()).unwrap();

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from_static(b"partial")),
        Err(io::Error::other("connection reset")),
    ];
    let stream = futures::stream::iter(chunks).boxed();

    let result = stager.stage_stream(stream, ".mp3").await;

    assert!(matches!(result, Err(StagingError::Source(_))));
    let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert!(
        leftovers.is_empty(),
        "a failed staging must not leave a partial file behind"
    );
}
