use config::{Config, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub scribe: ScribeSettings,
    pub email: EmailSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Optional `appsettings.<env>` file, overridden by `APP__`-prefixed
    /// environment variables (e.g. `APP__EMAIL__SENDER`).
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(EnvironmentSource::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Memory,
    S3,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub region: Option<String>,
    /// Custom S3-compatible endpoint, mainly for local stacks.
    pub endpoint: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::Memory,
            region: None,
            endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScribeSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Role the scribe service assumes to read the audio and write output.
    pub data_access_role_arn: String,
    pub note_template: String,
}

impl Default for ScribeSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8089".to_string(),
            api_key: None,
            data_access_role_arn: String::new(),
            note_template: "PHYSICAL_SOAP".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub implicit_tls: bool,
    /// Verified sender address. Empty disables patient notifications.
    pub sender: String,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_string(),
            smtp_port: 587,
            username: None,
            password: None,
            implicit_tls: false,
            sender: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            enable_json: false,
        }
    }
}
