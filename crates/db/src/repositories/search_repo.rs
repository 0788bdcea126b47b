//! Global search across movies, users, and reviews.
//!
//! One statement per requested kind. Each binds `$1` = prefix pattern,
//! `$2` = substring pattern, `$3` = per-kind limit, and orders by
//! `relevance_tier` first. The statements run concurrently on the pool and
//! the first failure aborts the whole search.

use marquee_core::aggregate::{AggregationSpec, MOVIE_STATS, USER_STATS};
use marquee_core::search::{
    SearchKind, SearchRequest, TierColumns, MOVIE_TIERS, REVIEW_TIERS, USER_TIERS,
};
use marquee_core::types::Timestamp;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use super::movie_repo::{movie_columns, movie_from};
use super::review_repo::{review_columns, review_from};
use super::user_repo::user_columns;
use crate::models::search::{MovieHitRow, ReviewHitRow, SearchResult, SearchResults, UserHitRow};

const PREFIX_PARAM: usize = 1;
const CONTAINS_PARAM: usize = 2;
const LIMIT_PARAM: usize = 3;

/// Static description of one searchable kind.
struct SearchSource {
    kind: SearchKind,
    columns: &'static str,
    from: &'static str,
    /// Alias whose `active` flag gates the primary row.
    alias: &'static str,
    stats: Option<AggregationSpec>,
    tiers: TierColumns,
    /// Ordering inside a tier, before the final `id ASC`.
    within_tier: &'static str,
    id: &'static str,
}

impl SearchSource {
    fn sql(&self) -> String {
        let stats = self
            .stats
            .map(|s| format!(", {}", s.select_list()))
            .unwrap_or_default();
        format!(
            "SELECT {columns}{stats}, {tier} AS relevance_tier \
             FROM {from} \
             WHERE {alias}.active = TRUE AND {matches} \
             ORDER BY relevance_tier ASC, {within_tier}, {id} ASC \
             LIMIT ${LIMIT_PARAM}",
            columns = self.columns,
            tier = self.tiers.tier_expr(PREFIX_PARAM),
            from = self.from,
            alias = self.alias,
            matches = self.tiers.match_expr(CONTAINS_PARAM),
            within_tier = self.within_tier,
            id = self.id,
        )
    }
}

const MOVIES: SearchSource = SearchSource {
    kind: SearchKind::Movie,
    columns: movie_columns!(),
    from: movie_from!(),
    alias: "m",
    stats: Some(MOVIE_STATS),
    tiers: MOVIE_TIERS,
    within_tier: "average_rating DESC, review_count DESC",
    id: "m.id",
};

const USERS: SearchSource = SearchSource {
    kind: SearchKind::User,
    columns: user_columns!(),
    from: "users u",
    alias: "u",
    stats: Some(USER_STATS),
    tiers: USER_TIERS,
    within_tier: "review_count DESC, follower_count DESC",
    id: "u.id",
};

const REVIEWS: SearchSource = SearchSource {
    kind: SearchKind::Review,
    columns: review_columns!(),
    from: review_from!(),
    alias: "r",
    stats: None,
    tiers: REVIEW_TIERS,
    within_tier: "r.like_count DESC, r.created_at DESC",
    id: "r.id",
};

/// Runs global search.
pub struct SearchRepo;

impl SearchRepo {
    /// Search every kind `request` selects; unselected kinds stay `None`.
    pub async fn search(
        pool: &PgPool,
        request: &SearchRequest,
        now: Timestamp,
    ) -> Result<SearchResults, sqlx::Error> {
        let prefix = request.prefix_pattern();
        let contains = request.contains_pattern();
        let patterns = Patterns {
            prefix: &prefix,
            contains: &contains,
            limit: request.limit,
        };

        let (movies, users, reviews) = futures::try_join!(
            search_kind(pool, request, &MOVIES, &patterns, |r: MovieHitRow| r.into_result(now)),
            search_kind(pool, request, &USERS, &patterns, |r: UserHitRow| r.into_result(now)),
            search_kind(pool, request, &REVIEWS, &patterns, |r: ReviewHitRow| r.into_result(now)),
        )?;

        Ok(SearchResults {
            movies,
            users,
            reviews,
        })
    }
}

struct Patterns<'a> {
    prefix: &'a str,
    contains: &'a str,
    limit: i64,
}

/// Run one kind's statement if `request` selects it, shaping each row.
async fn search_kind<T, F>(
    pool: &PgPool,
    request: &SearchRequest,
    source: &SearchSource,
    patterns: &Patterns<'_>,
    shape: F,
) -> Result<Option<Vec<SearchResult>>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    F: Fn(T) -> SearchResult,
{
    if !request.kinds.includes(source.kind) {
        return Ok(None);
    }
    let rows: Vec<T> = fetch_hits(pool, source, patterns).await?;
    Ok(Some(rows.into_iter().map(shape).collect()))
}

async fn fetch_hits<T>(
    pool: &PgPool,
    source: &SearchSource,
    patterns: &Patterns<'_>,
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let sql = source.sql();
    sqlx::query_as::<_, T>(&sql)
        .bind(patterns.prefix)
        .bind(patterns.contains)
        .bind(patterns.limit)
        .fetch_all(pool)
        .await
        .inspect_err(|e| {
            tracing::error!(
                kind = source.kind.group_name(),
                error = %e,
                "Search query failed",
            );
        })
}
