mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, DocumentStoreProvider, LlmSettings, LoggingSettings, RateLimitSettings,
    ServerSettings, Settings, UploadSettings,
};
