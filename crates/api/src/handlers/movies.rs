//! Handlers for the movie listing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use marquee_core::error::CoreError;
use marquee_core::params::{parse_flag, parse_id, parse_text};
use marquee_core::sort::SortKey;
use marquee_db::models::movie::{MovieFilters, MovieItem};
use marquee_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::middleware::auth::MaybeAuthUser;
use crate::query::{page_request, parse_query, MovieQuery};
use crate::response::PageResponse;
use crate::state::AppState;

/// GET /api/v1/movies
///
/// Active movies with genre and stats. `mine=true` restricts the listing to
/// movies the caller created and requires a bearer token.
pub async fn list_movies(
    MaybeAuthUser(caller): MaybeAuthUser,
    State(state): State<AppState>,
    query: Result<Query<MovieQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<MovieItem>>> {
    let params = parse_query(query)?;

    let mine = parse_flag(params.mine.as_deref(), "mine")?;
    let creator_id = match (mine, caller) {
        (false, _) => None,
        (true, Some(user)) => Some(user.user_id),
        (true, None) => {
            return Err(CoreError::Unauthorized(
                "Authentication required to list your own movies".into(),
            )
            .into())
        }
    };

    let filters = MovieFilters {
        search: parse_text(params.search.as_deref()),
        genre_id: parse_id(params.genre.as_deref(), "genero")?,
        creator_id,
    };
    let sort = SortKey::parse(params.sort.as_deref());
    let window = page_request(params.page.as_deref(), params.limit.as_deref())?;

    let page = MovieRepo::list(&state.pool, &filters, sort, window).await?;

    let now = Utc::now();
    Ok(Json(PageResponse::new(page.map(|row| row.into_item(now)))))
}
