mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    EmailSettings, LoggingSettings, ScribeSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings,
};
