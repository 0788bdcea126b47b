//! Handlers for the public user directory.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use marquee_core::params::parse_text;
use marquee_core::sort::SortKey;
use marquee_db::models::user::{UserFilters, UserItem};
use marquee_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::query::{page_request, parse_query, BasicListQuery};
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<BasicListQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<UserItem>>> {
    let params = parse_query(query)?;

    let filters = UserFilters {
        search: parse_text(params.search.as_deref()),
    };
    let sort = SortKey::parse(params.sort.as_deref());
    let window = page_request(params.page.as_deref(), params.limit.as_deref())?;

    let page = UserRepo::list(&state.pool, &filters, sort, window).await?;

    let now = Utc::now();
    Ok(Json(PageResponse::new(page.map(|row| row.into_item(now)))))
}
