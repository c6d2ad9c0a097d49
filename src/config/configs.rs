use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::{defaults, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Reads `APP_<SECTION>__<KEY>` variables, after loading a `.env` from the
    /// crate root or the working directory, and validates the result.
    pub fn from_env() -> Result<Self> {
        let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(defaults::DOTENV_FILE);
        if dotenvy::from_path(&manifest_env).is_err() {
            let _ = dotenvy::from_filename(defaults::DOTENV_FILE);
        }

        let cfg = Self::from_source(
            config_rs::Environment::with_prefix(defaults::ENV_PREFIX)
                .prefix_separator("_")
                .separator(defaults::ENV_SEPARATOR)
                .try_parsing(true),
        )?;
        validate::validate(&cfg)?;
        Ok(cfg)
    }

    fn from_source(source: config_rs::Environment) -> Result<Self> {
        config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize()
            .context("failed to deserialize environment into config")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.general.host, self.general.port)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE,
        }
    }
}

impl DatabaseConfig {
    /// Single-connection in-memory SQLite; every pooled connection would
    /// otherwise open its own empty database.
    pub fn sqlite_in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_idle: 1,
        }
    }
}
