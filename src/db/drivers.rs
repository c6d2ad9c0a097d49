use anyhow::{Result, bail};
use sea_orm::{ConnectionTrait, DatabaseConnection};

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Postgres,
    Sqlite,
}

impl Driver {
    pub fn from_url(url: &str) -> Result<Self> {
        let normalized = url.trim().to_ascii_lowercase();
        if normalized.starts_with("postgres://") || normalized.starts_with("postgresql://") {
            return Ok(Driver::Postgres);
        }
        if normalized.starts_with("sqlite:") {
            return Ok(Driver::Sqlite);
        }
        bail!(
            "unsupported database url '{}'; expected scheme postgres://, postgresql://, or sqlite:",
            redact_url(url)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Driver::Postgres => "postgres",
            Driver::Sqlite => "sqlite",
        }
    }

    pub async fn post_connect(self, db: &DatabaseConnection) -> Result<()> {
        if self == Driver::Sqlite {
            db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
            db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
                .await?;
        }
        Ok(())
    }
}

fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    if let Some((scheme, _)) = trimmed.split_once("://") {
        format!("{scheme}://<redacted>")
    } else if let Some((scheme, _)) = trimmed.split_once(':') {
        format!("{scheme}:<redacted>")
    } else {
        "<invalid-url>".to_string()
    }
}
