//! Handlers for follow listings.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use marquee_core::params::{parse_id, parse_text};
use marquee_core::sort::SortKey;
use marquee_core::types::DbId;
use marquee_db::models::follow::{FollowDirection, FollowFilters, FollowItem};
use marquee_db::repositories::FollowRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::query::{page_request, parse_query, FollowQuery};
use crate::response::PageResponse;
use crate::state::AppState;

/// `meta` block of the follow listing.
#[derive(Debug, Serialize)]
pub struct FollowMeta {
    pub tipo: FollowDirection,
    pub usuario_id: DbId,
    /// Whether the listed user is the caller.
    pub es_propio: bool,
}

/// GET /api/v1/follows
///
/// `tipo=siguiendo` lists who the target follows, `tipo=seguidores` who
/// follows the target. The target defaults to the caller. A target that does
/// not exist or is inactive yields an empty page.
pub async fn list_follows(
    auth: AuthUser,
    State(state): State<AppState>,
    query: Result<Query<FollowQuery>, QueryRejection>,
) -> AppResult<Json<PageResponse<FollowItem, FollowMeta>>> {
    let params = parse_query(query)?;

    let direction = FollowDirection::parse(params.tipo.as_deref())?;
    let target_id = parse_id(params.user.as_deref(), "usuario")?.unwrap_or(auth.user_id);
    let filters = FollowFilters {
        search: parse_text(params.search.as_deref()),
    };
    let sort = SortKey::parse(params.sort.as_deref());
    let window = page_request(params.page.as_deref(), params.limit.as_deref())?;

    let page = FollowRepo::list(&state.pool, target_id, direction, &filters, sort, window).await?;

    let now = Utc::now();
    let meta = FollowMeta {
        tipo: direction,
        usuario_id: target_id,
        es_propio: target_id == auth.user_id,
    };
    Ok(Json(
        PageResponse::new(page.map(|row| row.into_item(now))).with_meta(meta),
    ))
}
