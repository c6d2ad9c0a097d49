use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::entities::notebook,
    error::AppError,
    response::{ApiResult, JsonResponse},
    services::{NotebookService, ServiceContext},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct NotebookResponse {
    pub id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/notebooks", get(list_notebooks).post(create_notebook))
        .route(
            "/notebooks/{notebook_id}",
            get(show_notebook).delete(delete_notebook),
        )
        .with_state(state)
}

async fn list_notebooks(State(state): State<Arc<AppState>>) -> ApiResult<Vec<NotebookResponse>> {
    let notebooks = notebook_service(&state).list_notebooks().await?;
    JsonResponse::ok(notebooks.into_iter().map(NotebookResponse::from).collect())
}

async fn create_notebook(State(state): State<Arc<AppState>>) -> ApiResult<NotebookResponse> {
    let notebook = notebook_service(&state).create_notebook().await?;
    JsonResponse::created(notebook.into())
}

async fn show_notebook(
    State(state): State<Arc<AppState>>,
    Path(notebook_id): Path<Uuid>,
) -> ApiResult<NotebookResponse> {
    let notebook = notebook_service(&state)
        .require_notebook(&notebook_id)
        .await?;
    JsonResponse::ok(notebook.into())
}

async fn delete_notebook(
    State(state): State<Arc<AppState>>,
    Path(notebook_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    notebook_service(&state)
        .delete_notebook(&notebook_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

impl From<notebook::Model> for NotebookResponse {
    fn from(model: notebook::Model) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn notebook_service(state: &AppState) -> NotebookService {
    ServiceContext::from_state(state).notebook()
}
