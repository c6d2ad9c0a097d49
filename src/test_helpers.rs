//! Builders shared by the integration tests: an in-memory database with the
//! real schema, and factories for notebooks and notes.

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::{connection, entities::{note, notebook}},
    error::AppError,
    routes::app,
    services::{NoteParams, ServiceContext},
    state::AppState,
};

pub async fn sqlite_state() -> anyhow::Result<Arc<AppState>> {
    let cfg = AppConfig {
        database: DatabaseConfig::sqlite_in_memory(),
        ..AppConfig::default()
    };
    let db = connection::connect(&cfg.database).await?;
    Ok(AppState::new(cfg, db))
}

pub fn test_app(state: &Arc<AppState>) -> Router {
    app(Arc::clone(state))
}

pub async fn create_notebook(state: &AppState) -> Result<notebook::Model, AppError> {
    ServiceContext::from_state(state)
        .notebook()
        .create_notebook()
        .await
}

pub async fn create_note(
    state: &AppState,
    notebook_id: &Uuid,
    contents: &str,
) -> Result<note::Model, AppError> {
    ServiceContext::from_state(state)
        .note()
        .create_note(notebook_id, &NoteParams::new(contents))
        .await
}

pub async fn count_notebooks(state: &AppState) -> Result<u64, AppError> {
    ServiceContext::from_state(state)
        .notebook()
        .count_notebooks()
        .await
}

pub async fn count_notes(state: &AppState) -> Result<u64, AppError> {
    ServiceContext::from_state(state).note().count_all().await
}

pub async fn count_notebook_notes(state: &AppState, notebook_id: &Uuid) -> Result<u64, AppError> {
    ServiceContext::from_state(state)
        .note()
        .count_by_notebook(notebook_id)
        .await
}
