pub mod catalog;
pub mod health;
pub mod search;
pub mod social;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                          movie listing (auth for mine=true)
/// /genres                                          genre listing
/// /users                                           user directory
/// /reviews                                         review listing
///
/// /favorites                                       caller's favorites (requires auth)
/// /follows                                         follow listing (requires auth)
///
/// /search                                          global search
/// ```
///
/// Every route answers `GET` only; other methods get a 405 error envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(social::router())
        .merge(search::router())
}
