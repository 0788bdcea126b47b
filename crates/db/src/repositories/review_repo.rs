//! Listing of the `reviews` table.
//!
//! A review is only visible while its author and its movie are both active.

use marquee_core::aggregate::AggregationSpec;
use marquee_core::listing::{ListingPlan, ListingSource};
use marquee_core::pagination::{Page, PageRequest};
use marquee_core::predicate::PredicateSet;
use marquee_core::sort::{SortColumns, SortKey};
use sqlx::PgPool;

use crate::listing::ListingEngine;
use crate::models::review::{ReviewFilters, ReviewRow};

/// Review columns with movie title and author username, matching [`ReviewRow`].
macro_rules! review_columns {
    () => {
        "r.id, r.title, r.body_text, r.score, r.like_count, r.dislike_count, r.created_at, \
         m.id AS movie_id, m.title AS movie_title, u.id AS user_id, u.username"
    };
}
pub(crate) use review_columns;

/// `reviews r` inner-joined to its active author and active movie.
macro_rules! review_from {
    () => {
        "reviews r \
         JOIN users u ON u.id = r.user_id AND u.active = TRUE \
         JOIN movies m ON m.id = r.movie_id AND m.active = TRUE"
    };
}
pub(crate) use review_from;

pub(crate) const REVIEW_TEXT_COLUMNS: &[&str] = &["r.title", "r.body_text"];

// Reviews carry their own counters, so there is nothing to aggregate.
const NO_STATS: AggregationSpec = AggregationSpec {
    parent_id: "r.id",
    stats: &[],
};

const SOURCE: ListingSource = ListingSource {
    entity: "review",
    columns: review_columns!(),
    from: review_from!(),
    primary_id: "r.id",
    stats: NO_STATS,
    sort: SortColumns {
        id: "r.id",
        date: "r.created_at",
        title: "r.title",
        rating: Some("r.score"),
        reviews: Some("r.like_count"),
        favorites: Some("(r.like_count - r.dislike_count)"),
    },
};

/// Provides listing operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    pub fn plan(filters: &ReviewFilters, sort: SortKey, page: PageRequest) -> ListingPlan {
        let predicates = PredicateSet::new()
            .active("r")
            .id_eq("r.movie_id", filters.movie_id)
            .id_eq("r.user_id", filters.user_id)
            .text_contains(REVIEW_TEXT_COLUMNS, filters.search.as_deref());
        ListingPlan::new(SOURCE, predicates, sort, page)
    }

    pub async fn list(
        pool: &PgPool,
        filters: &ReviewFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> Result<Page<ReviewRow>, sqlx::Error> {
        ListingEngine::list(pool, &Self::plan(filters, sort, page)).await
    }
}
