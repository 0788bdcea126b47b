//! Listing of a user's favorite movies.

use marquee_core::aggregate::MOVIE_STATS;
use marquee_core::listing::{ListingPlan, ListingSource};
use marquee_core::pagination::{Page, PageRequest};
use marquee_core::predicate::PredicateSet;
use marquee_core::sort::{SortColumns, SortKey};
use marquee_core::types::DbId;
use sqlx::PgPool;

use super::movie_repo::{movie_columns, MOVIE_TEXT_COLUMNS};
use crate::listing::ListingEngine;
use crate::models::favorite::{FavoriteFilters, FavoriteRow};

const SOURCE: ListingSource = ListingSource {
    entity: "favorite",
    columns: concat!("f.id AS favorite_id, f.added_at, ", movie_columns!()),
    from: "favorites f \
           JOIN movies m ON m.id = f.movie_id AND m.active = TRUE \
           JOIN genres g ON g.id = m.genre_id AND g.active = TRUE",
    primary_id: "f.id",
    stats: MOVIE_STATS,
    sort: SortColumns {
        id: "f.id",
        date: "f.added_at",
        title: "m.title",
        rating: Some("average_rating"),
        reviews: Some("review_count"),
        favorites: Some("favorite_count"),
    },
};

/// Provides listing operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// Plan the listing of `user_id`'s favorites. Date sorts use `added_at`.
    pub fn plan(
        user_id: DbId,
        filters: &FavoriteFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> ListingPlan {
        let predicates = PredicateSet::new()
            .active("f")
            .id_eq("f.user_id", Some(user_id))
            .id_eq("m.genre_id", filters.genre_id)
            .text_contains(MOVIE_TEXT_COLUMNS, filters.search.as_deref());
        ListingPlan::new(SOURCE, predicates, sort, page)
    }

    pub async fn list(
        pool: &PgPool,
        user_id: DbId,
        filters: &FavoriteFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> Result<Page<FavoriteRow>, sqlx::Error> {
        ListingEngine::list(pool, &Self::plan(user_id, filters, sort, page)).await
    }
}
