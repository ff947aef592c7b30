use std::env;
use std::path::PathBuf;

use super::Environment;

#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub engine: EngineSettings,
    pub staging: StagingSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub provider: EngineProviderSetting,
    /// Model name for the API provider, model file path for the CLI one.
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub binary: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineProviderSetting {
    OpenAi,
    Cli,
}

#[derive(Debug, Clone)]
pub struct StagingSettings {
    pub spool_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

impl Settings {
    /// Builds settings from environment variables with defaults that let the
    /// binary start unconfigured.
    pub fn from_env() -> Self {
        let environment = env::var("APP_ENVIRONMENT")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        let provider = match env::var("ENGINE_PROVIDER").ok().as_deref() {
            Some("cli") => EngineProviderSetting::Cli,
            _ => EngineProviderSetting::OpenAi,
        };

        Self {
            environment,
            server: ServerSettings {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8000),
            },
            engine: EngineSettings {
                provider,
                model: env::var("WHISPER_MODEL").unwrap_or_else(|_| "whisper-1".to_string()),
                api_key: env::var("OPENAI_API_KEY").ok(),
                base_url: env::var("OPENAI_BASE_URL").ok(),
                binary: env::var("WHISPER_CLI_BIN").ok().map(PathBuf::from),
            },
            staging: StagingSettings {
                spool_dir: env::var("STAGING_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| env::temp_dir().join("susurro")),
            },
            logging: LoggingSettings {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                json_format: env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(environment == Environment::Prod),
            },
        }
    }
}
