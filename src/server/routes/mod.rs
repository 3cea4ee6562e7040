mod categories;
mod questions;
mod quizzes;

use axum::extract::{FromRequest, FromRequestParts};
use axum::Json;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use super::error_handlers::ApiError;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

/// JSON body whose rejections answer with the API error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Path parameters; a segment that does not parse is a missing resource.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);
