//! HTTP handlers, one module per resource.

pub mod favorites;
pub mod follows;
pub mod genres;
pub mod movies;
pub mod reviews;
pub mod search;
pub mod users;

use crate::error::AppError;

/// Method fallback for every route: the path exists, the method does not.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
