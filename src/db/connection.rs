use std::time::Duration;

use anyhow::Context;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use super::{
    drivers::Driver,
    entities::prelude::{Note, Notebook},
};
use crate::config::DatabaseConfig;

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let driver = Driver::from_url(&cfg.url)?;

    let mut options = ConnectOptions::new(cfg.url.clone());
    options
        .max_connections(cfg.max_connections)
        .min_connections(cfg.min_idle)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {} database", driver.as_str()))?;
    driver.post_connect(&db).await?;
    sync_schema(&db).await?;
    Ok(db)
}

pub async fn sync_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    info!("syncing database schema from entities");
    db.get_schema_builder()
        .register(Notebook)
        .register(Note)
        .sync(db)
        .await
        .context("failed to sync database schema")?;
    Ok(())
}
