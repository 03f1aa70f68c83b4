use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use matching::MatchError;
use recipe_store::StoreError;
use serde::{Deserialize, Serialize};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    NoMatch(#[from] MatchError),

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Recipe book unavailable: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NoMatch(_) | ServiceError::RecipeNotFound | ServiceError::NotFound => {
                StatusCode::NOT_FOUND
            }
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::Store(StoreError::DuplicateId { .. }) => StatusCode::CONFLICT,
            ServiceError::Store(StoreError::InvalidValue { .. })
            | ServiceError::Store(StoreError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ServiceError::Store(_) | ServiceError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NoMatch(_) => "NO_MATCH",
            ServiceError::RecipeNotFound => "RECIPE_NOT_FOUND",
            ServiceError::NotFound => "NOT_FOUND",
            ServiceError::BadRequest(_) => "BAD_REQUEST",
            ServiceError::Store(StoreError::DuplicateId { .. }) => "DUPLICATE_ID",
            ServiceError::Store(StoreError::InvalidValue { .. })
            | ServiceError::Store(StoreError::ValidationError(_)) => "BAD_REQUEST",
            ServiceError::Store(_) => "STORE_ERROR",
            ServiceError::Upstream(_) => "UPSTREAM_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::BadRequest(format!("JSON parse error: {err}"))
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Upstream(err.to_string())
    }
}
