use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use susurro::application::ports::AudioFetcher;
use susurro::application::services::TranscriptionService;
use susurro::application::staging::AudioStager;
use susurro::infrastructure::audio::{EngineProvider, TranscriptionEngineFactory};
use susurro::infrastructure::fetch::HttpAudioFetcher;
use susurro::infrastructure::observability::{TracingConfig, init_tracing};
use susurro::presentation::{AppState, EngineProviderSetting, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig {
        environment: settings.environment.to_string(),
        default_level: settings.logging.level.clone(),
        json_format: settings.logging.json_format,
    });

    let provider = match settings.engine.provider {
        EngineProviderSetting::OpenAi => EngineProvider::OpenAi,
        EngineProviderSetting::Cli => EngineProvider::WhisperCli,
    };

    // The engine handle is built once, before the listener binds, and shared
    // read-only by every in-flight request.
    let engine = TranscriptionEngineFactory::create(
        provider,
        &settings.engine.model,
        settings.engine.api_key.clone(),
        settings.engine.base_url.clone(),
        settings.engine.binary.clone(),
    )
    .context("Failed to build the transcription engine")?;

    let fetcher: Arc<dyn AudioFetcher> = Arc::new(HttpAudioFetcher::new());
    let stager = AudioStager::new(&settings.staging.spool_dir)
        .context("Failed to prepare the staging directory")?;

    let transcription_service = Arc::new(TranscriptionService::new(engine, fetcher, stager));
    let router = create_router(AppState {
        transcription_service,
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!(
        %addr,
        spool_dir = %settings.staging.spool_dir.display(),
        "Listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
