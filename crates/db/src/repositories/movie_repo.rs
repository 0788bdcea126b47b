//! Listing of the `movies` table.

use marquee_core::aggregate::MOVIE_STATS;
use marquee_core::listing::{ListingPlan, ListingSource};
use marquee_core::pagination::{Page, PageRequest};
use marquee_core::predicate::PredicateSet;
use marquee_core::sort::{SortColumns, SortKey};
use sqlx::PgPool;

use crate::listing::ListingEngine;
use crate::models::movie::{MovieFilters, MovieRow};

/// Movie columns (with genre) matching [`MovieRow`], stats excluded.
macro_rules! movie_columns {
    () => {
        "m.id, m.title, m.director, m.release_year, m.duration_minutes, m.synopsis, \
         m.creator_user_id, m.created_at, g.id AS genre_id, g.name AS genre_name, \
         g.color_hex AS genre_color"
    };
}
pub(crate) use movie_columns;

/// `movies m` inner-joined to its active genre.
macro_rules! movie_from {
    () => {
        "movies m JOIN genres g ON g.id = m.genre_id AND g.active = TRUE"
    };
}
pub(crate) use movie_from;

/// Columns searched by the free-text filter.
pub(crate) const MOVIE_TEXT_COLUMNS: &[&str] = &["m.title", "m.director"];

pub(crate) const MOVIE_SORT: SortColumns = SortColumns {
    id: "m.id",
    date: "m.created_at",
    title: "m.title",
    rating: Some("average_rating"),
    reviews: Some("review_count"),
    favorites: Some("favorite_count"),
};

const SOURCE: ListingSource = ListingSource {
    entity: "movie",
    columns: movie_columns!(),
    from: movie_from!(),
    primary_id: "m.id",
    stats: MOVIE_STATS,
    sort: MOVIE_SORT,
};

/// Provides listing operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Build the listing plan for a filter set.
    pub fn plan(filters: &MovieFilters, sort: SortKey, page: PageRequest) -> ListingPlan {
        let predicates = PredicateSet::new()
            .active("m")
            .id_eq("m.genre_id", filters.genre_id)
            .id_eq("m.creator_user_id", filters.creator_id)
            .text_contains(MOVIE_TEXT_COLUMNS, filters.search.as_deref());
        ListingPlan::new(SOURCE, predicates, sort, page)
    }

    /// List active movies with genre and rating/review/favorite stats.
    pub async fn list(
        pool: &PgPool,
        filters: &MovieFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> Result<Page<MovieRow>, sqlx::Error> {
        ListingEngine::list(pool, &Self::plan(filters, sort, page)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_filters_on_active_genre_creator_and_text() {
        let filters = MovieFilters {
            search: Some("nolan".into()),
            genre_id: Some(4),
            creator_id: Some(7),
        };
        let plan = MovieRepo::plan(&filters, SortKey::DateDesc, PageRequest::default());
        assert_eq!(
            plan.count_sql(),
            "SELECT COUNT(DISTINCT m.id)::BIGINT FROM movies m \
             JOIN genres g ON g.id = m.genre_id AND g.active = TRUE \
             WHERE m.active = TRUE AND m.genre_id = $1 AND m.creator_user_id = $2 \
             AND (m.title ILIKE $3 OR m.director ILIKE $3)"
        );
        assert_eq!(plan.predicates().values().count(), 3);
    }

    #[test]
    fn plan_without_filters_only_requires_active() {
        let plan = MovieRepo::plan(&MovieFilters::default(), SortKey::TitleAsc, PageRequest::default());
        assert_eq!(plan.predicates().len(), 1);
        assert!(plan.page_sql().contains("ORDER BY m.title ASC, m.id ASC LIMIT $1 OFFSET $2"));
    }
}
