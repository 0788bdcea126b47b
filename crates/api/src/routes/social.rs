//! Route definitions for per-user social listings. Both require auth.

use axum::routing::get;
use axum::Router;

use crate::handlers::{favorites, follows, method_not_allowed};
use crate::state::AppState;

/// ```text
/// GET    /favorites             -> list_favorites
/// GET    /follows               -> list_follows
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/favorites",
            get(favorites::list_favorites).fallback(method_not_allowed),
        )
        .route(
            "/follows",
            get(follows::list_follows).fallback(method_not_allowed),
        )
}
