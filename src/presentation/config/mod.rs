mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    EngineProviderSetting, EngineSettings, LoggingSettings, ServerSettings, Settings,
    StagingSettings,
};
