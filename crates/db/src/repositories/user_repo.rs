//! Listing of the `users` table.
//!
//! Only public profile columns are selected; email and role never leave the
//! database through these queries.

use marquee_core::aggregate::USER_STATS;
use marquee_core::listing::{ListingPlan, ListingSource};
use marquee_core::pagination::{Page, PageRequest};
use marquee_core::predicate::PredicateSet;
use marquee_core::sort::{SortColumns, SortKey};
use marquee_core::types::DbId;
use sqlx::PgPool;

use crate::listing::ListingEngine;
use crate::models::user::{UserFilters, UserRow};

/// Public user columns matching [`UserRow`], stats excluded.
macro_rules! user_columns {
    () => {
        "u.id, u.username, u.full_name, u.registered_at"
    };
}
pub(crate) use user_columns;

pub(crate) const USER_TEXT_COLUMNS: &[&str] = &["u.username", "u.full_name"];

/// Popularity for users is follower count.
pub(crate) const USER_SORT: SortColumns = SortColumns {
    id: "u.id",
    date: "u.registered_at",
    title: "u.username",
    rating: None,
    reviews: Some("review_count"),
    favorites: Some("follower_count"),
};

const SOURCE: ListingSource = ListingSource {
    entity: "user",
    columns: user_columns!(),
    from: "users u",
    primary_id: "u.id",
    stats: USER_STATS,
    sort: USER_SORT,
};

/// Provides listing operations for users.
pub struct UserRepo;

impl UserRepo {
    pub fn plan(filters: &UserFilters, sort: SortKey, page: PageRequest) -> ListingPlan {
        let predicates = PredicateSet::new()
            .active("u")
            .text_contains(USER_TEXT_COLUMNS, filters.search.as_deref());
        ListingPlan::new(SOURCE, predicates, sort, page)
    }

    pub async fn list(
        pool: &PgPool,
        filters: &UserFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> Result<Page<UserRow>, sqlx::Error> {
        ListingEngine::list(pool, &Self::plan(filters, sort, page)).await
    }

    /// Whether `id` names an existing, active user.
    pub async fn is_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND active = TRUE)",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_sort_degrades_for_users() {
        let plan = UserRepo::plan(
            &UserFilters::default(),
            SortKey::RatingDesc,
            PageRequest::default(),
        );
        assert_eq!(plan.sort(), SortKey::DateDesc);
    }

    #[test]
    fn popularity_orders_by_followers() {
        let plan = UserRepo::plan(
            &UserFilters::default(),
            SortKey::PopularityDesc,
            PageRequest::default(),
        );
        assert!(plan.page_sql().contains(
            "ORDER BY follower_count DESC, review_count DESC, u.registered_at DESC, u.id DESC"
        ));
    }

    #[test]
    fn page_sql_never_selects_private_columns() {
        let plan = UserRepo::plan(
            &UserFilters::default(),
            SortKey::DateDesc,
            PageRequest::default(),
        );
        let sql = plan.page_sql();
        assert!(!sql.contains("email"));
        assert!(!sql.contains("role"));
    }
}
