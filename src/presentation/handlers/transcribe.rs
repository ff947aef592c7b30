use axum::Json;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::application::services::TranscribeError;
use crate::domain::{AudioOrigin, AudioPayload, TranscriptionRecord};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeUrlRequest {
    pub url: String,
}

#[derive(Serialize)]
pub struct TranscriptionResponse {
    pub success: bool,
    pub text: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl From<TranscriptionRecord> for TranscriptionResponse {
    fn from(record: TranscriptionRecord) -> Self {
        let (file_size, source_url) = match record.origin {
            AudioOrigin::Upload { size_bytes } => (Some(size_bytes), None),
            AudioOrigin::RemoteUrl { url } => (None, Some(url)),
        };
        Self {
            success: true,
            text: record.text,
            language: record.language,
            file_size,
            source_url,
        }
    }
}

#[derive(Serialize)]
pub struct TranscribeErrorResponse {
    pub error: String,
    pub detail: String,
    pub tip: String,
}

/// `POST /transcribe/` — transcribe an uploaded audio file, sent either as a
/// multipart `file` field or as the raw request body.
#[tracing::instrument(skip_all)]
pub async fn transcribe_upload_handler(
    State(state): State<AppState>,
    request: Request,
) -> Response {
    let result = match read_audio_payload(request).await {
        Ok(payload) => state.transcription_service.transcribe_upload(payload).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(record) => {
            (StatusCode::OK, Json(TranscriptionResponse::from(record))).into_response()
        }
        Err(e) => pipeline_error_response(e),
    }
}

/// `POST /transcribe/url` — fetch a remote audio file and transcribe it.
#[tracing::instrument(skip_all)]
pub async fn transcribe_url_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscribeUrlRequest>,
) -> Response {
    match state.transcription_service.transcribe_url(&request.url).await {
        Ok(record) => {
            (StatusCode::OK, Json(TranscriptionResponse::from(record))).into_response()
        }
        Err(e) => pipeline_error_response(e),
    }
}

/// Pulls the audio payload out of the request. Multipart uploads keep their
/// filename as a suffix hint; raw bodies carry no hint. A multipart request
/// without a file field falls through as an empty payload, which the
/// pipeline rejects.
async fn read_audio_payload(request: Request) -> Result<AudioPayload, TranscribeError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| TranscribeError::Processing(e.to_string()))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| TranscribeError::Processing(e.to_string()))?
        {
            if field.file_name().is_some() || field.name() == Some("file") {
                let filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| TranscribeError::Processing(e.to_string()))?;
                return Ok(AudioPayload::new(data, filename));
            }
        }

        Ok(AudioPayload::new(Bytes::new(), None))
    } else {
        let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
            .await
            .map_err(|e| TranscribeError::Processing(e.to_string()))?;
        Ok(AudioPayload::new(bytes, None))
    }
}

fn pipeline_error_response(error: TranscribeError) -> Response {
    let status = match &error {
        TranscribeError::EmptyInput | TranscribeError::Fetch(_) => StatusCode::BAD_REQUEST,
        TranscribeError::Transcription(_) | TranscribeError::Processing(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_client_error() {
        tracing::warn!(error = %error, "Transcription request rejected");
    } else {
        tracing::error!(error = %error, "Transcription request failed");
    }

    (
        status,
        Json(TranscribeErrorResponse {
            error: error.summary().to_string(),
            detail: error.detail(),
            tip: error.hint().to_string(),
        }),
    )
        .into_response()
}
