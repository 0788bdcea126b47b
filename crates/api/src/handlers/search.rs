//! Handler for global search.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use marquee_core::params::parse_int;
use marquee_core::search::{KindSelection, SearchRequest};
use marquee_db::models::search::SearchResults;
use marquee_db::repositories::SearchRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::{parse_query, SearchQuery};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// `data` block of the search response.
#[derive(Debug, Serialize)]
pub struct SearchData {
    /// The trimmed term that was searched.
    pub query: String,
    pub tipo: KindSelection,
    pub total_resultados: usize,
    /// Hits grouped by kind; kinds not requested are omitted.
    pub resultados: SearchResults,
}

/// GET /api/v1/search
///
/// Searches movies, users, and reviews (or the subset named by `tipo`).
/// Each group holds at most `limite` hits, ranked prefix matches first.
pub async fn global_search(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<SuccessResponse<SearchData>>> {
    let params = parse_query(query)?;

    let kinds = KindSelection::parse(params.tipo.as_deref())?;
    let limit = parse_int(params.limit.as_deref(), "limite")?;
    let request = SearchRequest::new(params.q.as_deref(), kinds, limit)?;

    let start = std::time::Instant::now();
    let results = SearchRepo::search(&state.pool, &request, Utc::now()).await?;

    tracing::debug!(
        tipo = kinds.as_str(),
        results = results.total_results(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Search executed",
    );

    Ok(Json(SuccessResponse::new(SearchData {
        total_resultados: results.total_results(),
        query: request.term,
        tipo: kinds,
        resultados: results,
    })))
}
