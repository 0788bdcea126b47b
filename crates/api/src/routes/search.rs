//! Route definitions for global search.

use axum::routing::get;
use axum::Router;

use crate::handlers::{method_not_allowed, search};
use crate::state::AppState;

/// ```text
/// GET    /search                -> global_search
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/search",
        get(search::global_search).fallback(method_not_allowed),
    )
}
