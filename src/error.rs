use axum::http::StatusCode;
use thiserror::Error;

use crate::{db::dao::DaoLayerError, validation::ValidationErrors};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unprocessable(ValidationErrors),
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Unprocessable(errors)
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { .. } => AppError::not_found(err.to_string()),
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(db_err) => AppError::internal_with_source(
                "Database operation failed. Please check the logs for more details",
                db_err,
            ),
        }
    }
}
