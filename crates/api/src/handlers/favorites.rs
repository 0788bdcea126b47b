//! Handlers for the caller's favorite movies.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use marquee_core::params::{parse_id, parse_text};
use marquee_core::sort::SortKey;
use marquee_db::models::favorite::{FavoriteFilters, FavoriteItem};
use marquee_db::repositories::FavoriteRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{page_request, parse_query, FavoriteQuery};
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/favorites
///
/// Date sorts order by when the movie was added to favorites.
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
    query: Result<Query<FavoriteQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<FavoriteItem>>> {
    let params = parse_query(query)?;

    let filters = FavoriteFilters {
        search: parse_text(params.search.as_deref()),
        genre_id: parse_id(params.genre.as_deref(), "genero")?,
    };
    let sort = SortKey::parse(params.sort.as_deref());
    let window = page_request(params.page.as_deref(), params.limit.as_deref())?;

    let page = FavoriteRepo::list(&state.pool, auth.user_id, &filters, sort, window).await?;

    let now = Utc::now();
    Ok(Json(PageResponse::new(page.map(|row| row.into_item(now)))))
}
