//! Route definitions for the public catalog listings.

use axum::routing::get;
use axum::Router;

use crate::handlers::{genres, method_not_allowed, movies, reviews, users};
use crate::state::AppState;

/// Catalog routes.
///
/// ```text
/// GET    /movies                -> list_movies
/// GET    /genres                -> list_genres
/// GET    /users                 -> list_users
/// GET    /reviews               -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(movies::list_movies).fallback(method_not_allowed),
        )
        .route(
            "/genres",
            get(genres::list_genres).fallback(method_not_allowed),
        )
        .route("/users", get(users::list_users).fallback(method_not_allowed))
        .route(
            "/reviews",
            get(reviews::list_reviews).fallback(method_not_allowed),
        )
}
