//! Handlers for the review listing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use marquee_core::params::{parse_id, parse_text};
use marquee_core::sort::SortKey;
use marquee_db::models::review::{ReviewFilters, ReviewItem};
use marquee_db::repositories::ReviewRepo;

use crate::error::AppResult;
use crate::query::{page_request, parse_query, ReviewQuery};
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/reviews
///
/// Optional `pelicula` and `usuario` narrow the listing to one movie or one
/// author. `rating_desc` sorts by score, `popularity_desc` by net likes.
pub async fn list_reviews(
    State(state): State<AppState>,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<ReviewItem>>> {
    let params = parse_query(query)?;

    let filters = ReviewFilters {
        search: parse_text(params.search.as_deref()),
        movie_id: parse_id(params.movie.as_deref(), "pelicula")?,
        user_id: parse_id(params.user.as_deref(), "usuario")?,
    };
    let sort = SortKey::parse(params.sort.as_deref());
    let window = page_request(params.page.as_deref(), params.limit.as_deref())?;

    let page = ReviewRepo::list(&state.pool, &filters, sort, window).await?;

    let now = Utc::now();
    Ok(Json(PageResponse::new(page.map(|row| row.into_item(now)))))
}
