use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::{error::AppError, validation::ValidationErrors};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const SERIALIZE_FAILED_BODY: &str = r#"{"status":500,"message":"internal server error"}"#;

pub type ApiResult<T> = Result<JsonResponse<T>, AppError>;

/// A resource rendered as bare JSON with an explicit status.
#[derive(Debug)]
pub struct JsonResponse<T: Serialize> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: Serialize> JsonResponse<T> {
    pub fn ok(body: T) -> ApiResult<T> {
        Self::with_status(StatusCode::OK, body)
    }

    pub fn created(body: T) -> ApiResult<T> {
        Self::with_status(StatusCode::CREATED, body)
    }

    pub fn with_status(status: StatusCode, body: T) -> ApiResult<T> {
        Ok(Self { status, body })
    }
}

impl<T: Serialize> IntoResponse for JsonResponse<T> {
    fn into_response(self) -> Response {
        json_response(self.status, &self.body)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            errors: None,
        }
    }

    pub fn from_error(err: &AppError) -> Self {
        let mut body = Self::new(err.status(), err.to_string());
        if let AppError::Unprocessable(errors) = err {
            body.errors = Some(errors.clone());
        }
        body
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        json_response(status, &self)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log_app_error(&self, status);
        }
        ErrorBody::from_error(&self).into_response()
    }
}

pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    let (status, bytes) = match serde_json::to_vec(body) {
        Ok(bytes) => (status, bytes),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                SERIALIZE_FAILED_BODY.as_bytes().to_vec(),
            )
        }
    };
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        bytes,
    )
        .into_response()
}

pub(crate) fn log_app_error(err: &AppError, status: StatusCode) {
    match std::error::Error::source(err) {
        Some(source) => tracing::error!(
            status = status.as_u16(),
            error = %err,
            source = %source,
            "request failed"
        ),
        None => tracing::error!(status = status.as_u16(), error = %err, "request failed"),
    }
}
