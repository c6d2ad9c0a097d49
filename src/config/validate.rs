use anyhow::{Result, bail};

use super::AppConfig;
use crate::db::drivers::Driver;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.port == 0 {
        errors.push("general.port must be > 0".to_string());
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    } else if Driver::from_url(&database.url).is_err() {
        errors.push("database.url must use a postgres:// or sqlite: scheme".to_string());
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    #[test]
    fn default_config_is_valid() {
        validate(&AppConfig::default()).expect("defaults should validate");
    }

    #[test]
    fn collects_every_problem_into_one_error() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.database = DatabaseConfig {
            url: "mysql://localhost/notes".to_string(),
            max_connections: 1,
            min_idle: 4,
        };

        let message = validate(&cfg).expect_err("config should be rejected").to_string();

        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("postgres:// or sqlite:"));
        assert!(message.contains("database.min_idle (4) must be <= database.max_connections (1)"));
    }

    #[test]
    fn accepts_in_memory_sqlite() {
        let cfg = AppConfig {
            database: DatabaseConfig::sqlite_in_memory(),
            ..AppConfig::default()
        };
        validate(&cfg).expect("in-memory sqlite should validate");
    }
}
