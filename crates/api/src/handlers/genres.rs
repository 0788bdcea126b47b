//! Handlers for the genre listing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use marquee_core::params::parse_text;
use marquee_core::sort::SortKey;
use marquee_db::models::genre::{GenreFilters, GenreItem};
use marquee_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::query::{page_request, parse_query, BasicListQuery};
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/genres
pub async fn list_genres(
    State(state): State<AppState>,
    query: Result<Query<BasicListQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<GenreItem>>> {
    let params = parse_query(query)?;

    let filters = GenreFilters {
        search: parse_text(params.search.as_deref()),
    };
    let sort = SortKey::parse(params.sort.as_deref());
    let window = page_request(params.page.as_deref(), params.limit.as_deref())?;

    let page = GenreRepo::list(&state.pool, &filters, sort, window).await?;
    Ok(Json(PageResponse::new(page.map(|row| row.into_item()))))
}
