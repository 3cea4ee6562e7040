use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failures a handler can answer with. Each one renders as
/// `{"success": false, "error": <status>, "message": <text>}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("Resource Not Found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("Request cannot be processed")]
    UnprocessableEntity,
    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unprocessable(error: sqlx::Error) -> Self {
        tracing::warn!("Store operation failed: {error}");
        ApiError::UnprocessableEntity
    }

    pub fn not_found(error: sqlx::Error) -> Self {
        tracing::warn!("Store operation failed: {error}");
        ApiError::NotFound
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        tracing::error!("Unhandled store error: {error}");
        ApiError::Internal
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> ApiError {
        tracing::debug!("Rejected request body: {rejection}");
        match rejection {
            // well-formed json carrying values of the wrong type
            JsonRejection::JsonDataError(_) => ApiError::UnprocessableEntity,
            _ => ApiError::BadRequest,
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> ApiError {
        tracing::debug!("Rejected path: {rejection}");
        ApiError::NotFound
    }
}
