//! Listing of the `genres` table.

use marquee_core::aggregate::GENRE_STATS;
use marquee_core::listing::{ListingPlan, ListingSource};
use marquee_core::pagination::{Page, PageRequest};
use marquee_core::predicate::PredicateSet;
use marquee_core::sort::{SortColumns, SortKey};
use sqlx::PgPool;

use crate::listing::ListingEngine;
use crate::models::genre::{GenreFilters, GenreRow};

// Genres carry no timestamp; id order stands in for creation order.
const SOURCE: ListingSource = ListingSource {
    entity: "genre",
    columns: "g.id, g.name, g.color_hex",
    from: "genres g",
    primary_id: "g.id",
    stats: GENRE_STATS,
    sort: SortColumns {
        id: "g.id",
        date: "g.id",
        title: "g.name",
        rating: Some("average_rating"),
        reviews: Some("movie_count"),
        favorites: None,
    },
};

/// Provides listing operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    pub fn plan(filters: &GenreFilters, sort: SortKey, page: PageRequest) -> ListingPlan {
        let predicates = PredicateSet::new()
            .active("g")
            .text_contains(&["g.name"], filters.search.as_deref());
        ListingPlan::new(SOURCE, predicates, sort, page)
    }

    /// List active genres with movie count and average rating.
    pub async fn list(
        pool: &PgPool,
        filters: &GenreFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> Result<Page<GenreRow>, sqlx::Error> {
        ListingEngine::list(pool, &Self::plan(filters, sort, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popularity_degrades_to_date_desc() {
        let plan = GenreRepo::plan(
            &GenreFilters::default(),
            SortKey::PopularityDesc,
            PageRequest::default(),
        );
        assert_eq!(plan.sort(), SortKey::DateDesc);
        assert!(plan.page_sql().contains("ORDER BY g.id DESC LIMIT"));
    }

    #[test]
    fn rating_sort_uses_average_then_movie_count() {
        let plan = GenreRepo::plan(
            &GenreFilters::default(),
            SortKey::RatingDesc,
            PageRequest::default(),
        );
        assert!(plan
            .page_sql()
            .contains("ORDER BY average_rating DESC, movie_count DESC, g.id ASC"));
    }
}
