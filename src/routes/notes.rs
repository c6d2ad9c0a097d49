use std::sync::Arc;

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::entities::note,
    error::AppError,
    response::{ApiResult, JsonResponse},
    services::{NoteParams, NoteService, ServiceContext},
    state::AppState,
};

/// Accepts attributes flat (`{"contents": ..}`) or wrapped under the
/// resource key (`{"note": {"contents": ..}}`). Other keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub note: Option<NoteParams>,
    #[serde(
        default,
        deserialize_with = "crate::services::note_service::scalar_string"
    )]
    pub contents: Option<String>,
}

impl NoteRequest {
    pub fn into_params(self) -> NoteParams {
        self.note.unwrap_or(NoteParams {
            contents: self.contents,
        })
    }
}

const MAX_NOTE_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Note attributes from a JSON body. A blank body carries no attributes, so
/// it reaches validation instead of failing as malformed JSON.
pub struct NoteBody(pub NoteParams);

impl<S> FromRequest<S> for NoteBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_NOTE_BODY_BYTES).await.map_err(|_| {
            AppError::bad_request("Failed to read the request body").into_response()
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(NoteParams::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Json(request) = Json::<NoteRequest>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(request.into_params()))
    }
}

#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub notebook_id: Uuid,
    pub contents: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/notebooks/{notebook_id}/notes",
            get(list_notes).post(create_note),
        )
        .route(
            "/notebooks/{notebook_id}/notes/{note_id}",
            get(show_note)
                .patch(update_note)
                .put(update_note)
                .delete(delete_note),
        )
        .with_state(state)
}

async fn list_notes(
    State(state): State<Arc<AppState>>,
    Path(notebook_id): Path<Uuid>,
) -> ApiResult<Vec<NoteResponse>> {
    let notes = note_service(&state).list_notes(&notebook_id).await?;
    JsonResponse::ok(notes.into_iter().map(NoteResponse::from).collect())
}

async fn show_note(
    State(state): State<Arc<AppState>>,
    Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<NoteResponse> {
    let note = note_service(&state).get_note(&notebook_id, &note_id).await?;
    JsonResponse::ok(note.into())
}

async fn create_note(
    State(state): State<Arc<AppState>>,
    Path(notebook_id): Path<Uuid>,
    NoteBody(params): NoteBody,
) -> ApiResult<NoteResponse> {
    let note = note_service(&state)
        .create_note(&notebook_id, &params)
        .await?;
    JsonResponse::created(note.into())
}

async fn update_note(
    State(state): State<Arc<AppState>>,
    Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
    NoteBody(params): NoteBody,
) -> ApiResult<NoteResponse> {
    let note = note_service(&state)
        .update_note(&notebook_id, &note_id, &params)
        .await?;
    JsonResponse::ok(note.into())
}

async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path((notebook_id, note_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    note_service(&state)
        .delete_note(&notebook_id, &note_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

impl From<note::Model> for NoteResponse {
    fn from(model: note::Model) -> Self {
        Self {
            id: model.id,
            notebook_id: model.notebook_id,
            contents: model.contents,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn note_service(state: &AppState) -> NoteService {
    ServiceContext::from_state(state).note()
}
