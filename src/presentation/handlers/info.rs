use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// `GET /` — static description of the available endpoints.
pub async fn info_handler() -> impl IntoResponse {
    Json(ApiInfo {
        message: "Audio transcription API",
        endpoints: vec![
            EndpointInfo {
                method: "POST",
                path: "/transcribe/",
                description: "Transcribe an audio file sent as multipart or raw binary body",
            },
            EndpointInfo {
                method: "POST",
                path: "/transcribe/url",
                description: "Transcribe an audio file fetched from a remote URL",
            },
            EndpointInfo {
                method: "GET",
                path: "/health",
                description: "Liveness probe",
            },
            EndpointInfo {
                method: "GET",
                path: "/",
                description: "This information",
            },
        ],
    })
}
