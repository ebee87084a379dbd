/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_mail")]
    pub mail: MailSettings,

    #[serde(default = "default_scanner")]
    pub scanner: ScannerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Single allowed CORS origin; unrestricted when unset
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailSettings {
    /// SMTP relay hostname
    #[serde(default)]
    pub host: String,

    #[serde(default = "default_mail_port")]
    pub port: u16,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Sender address, e.g. `Birthdays <noreply@example.com>`
    #[serde(default)]
    pub from: String,

    /// Name used to sign email bodies
    #[serde(default = "default_signature")]
    pub signature: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScannerSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_hour")]
    pub hour: u32,

    #[serde(default = "default_minute")]
    pub minute: u32,
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with BDAY_).
        // Section and key are joined with a double underscore so multi-word
        // keys survive, e.g. BDAY_STORAGE__DATABASE_URL -> storage.database_url.
        settings = settings.add_source(
            config::Environment::with_prefix("BDAY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.mail.host.is_empty() {
            return Err(ServerError::Config(
                "SMTP host is required (set BDAY_MAIL__HOST)".to_string(),
            ));
        }

        if self.mail.from.is_empty() {
            return Err(ServerError::Config(
                "Mail sender address is required (set BDAY_MAIL__FROM)".to_string(),
            ));
        }

        if self.scanner.hour > 23 || self.scanner.minute > 59 {
            return Err(ServerError::Config(format!(
                "Invalid scanner time {:02}:{:02}",
                self.scanner.hour, self.scanner.minute
            )));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
        origin: None,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/birthdays.db".to_string()
}

fn default_mail() -> MailSettings {
    MailSettings {
        host: String::new(),
        port: default_mail_port(),
        username: String::new(),
        password: String::new(),
        from: String::new(),
        signature: default_signature(),
    }
}

fn default_mail_port() -> u16 {
    587
}

fn default_signature() -> String {
    "The Birthday Team".to_string()
}

fn default_scanner() -> ScannerSettings {
    ScannerSettings {
        enabled: default_enabled(),
        hour: default_hour(),
        minute: default_minute(),
    }
}

fn default_enabled() -> bool {
    true
}

fn default_hour() -> u32 {
    11
}

fn default_minute() -> u32 {
    0
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            mail: default_mail(),
            scanner: default_scanner(),
        }
    }
}
