//! Listing of follow relations for one target user.
//!
//! Both directions list the user on the other side of the relation. That
//! user must be active; the relation row must be active too.

use marquee_core::aggregate::USER_STATS;
use marquee_core::listing::{ListingPlan, ListingSource};
use marquee_core::pagination::{Page, PageRequest};
use marquee_core::predicate::PredicateSet;
use marquee_core::sort::{SortColumns, SortKey};
use marquee_core::types::DbId;
use sqlx::PgPool;

use super::user_repo::{user_columns, UserRepo, USER_TEXT_COLUMNS};
use crate::listing::ListingEngine;
use crate::models::follow::{FollowDirection, FollowFilters, FollowRow};

const FOLLOW_SORT: SortColumns = SortColumns {
    id: "u.id",
    date: "fw.followed_at",
    title: "u.username",
    rating: None,
    reviews: Some("review_count"),
    favorites: Some("follower_count"),
};

const FOLLOWING: ListingSource = ListingSource {
    entity: "following",
    columns: concat!("fw.followed_at, ", user_columns!()),
    from: "follows fw JOIN users u ON u.id = fw.followed_id AND u.active = TRUE",
    primary_id: "u.id",
    stats: USER_STATS,
    sort: FOLLOW_SORT,
};

const FOLLOWERS: ListingSource = ListingSource {
    entity: "followers",
    columns: concat!("fw.followed_at, ", user_columns!()),
    from: "follows fw JOIN users u ON u.id = fw.follower_id AND u.active = TRUE",
    primary_id: "u.id",
    stats: USER_STATS,
    sort: FOLLOW_SORT,
};

/// Provides listing operations for follows.
pub struct FollowRepo;

impl FollowRepo {
    pub fn plan(
        target_id: DbId,
        direction: FollowDirection,
        filters: &FollowFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> ListingPlan {
        let (source, target_column) = match direction {
            FollowDirection::Following => (FOLLOWING, "fw.follower_id"),
            FollowDirection::Followers => (FOLLOWERS, "fw.followed_id"),
        };
        let predicates = PredicateSet::new()
            .active("fw")
            .id_eq(target_column, Some(target_id))
            .text_contains(USER_TEXT_COLUMNS, filters.search.as_deref());
        ListingPlan::new(source, predicates, sort, page)
    }

    /// List one side of `target_id`'s follow relations.
    ///
    /// An absent or inactive target yields an empty page, not an error.
    pub async fn list(
        pool: &PgPool,
        target_id: DbId,
        direction: FollowDirection,
        filters: &FollowFilters,
        sort: SortKey,
        page: PageRequest,
    ) -> Result<Page<FollowRow>, sqlx::Error> {
        if !UserRepo::is_active(pool, target_id).await? {
            tracing::debug!(target_id, "Follow target missing or inactive");
            return Ok(Page::empty(page));
        }
        let plan = Self::plan(target_id, direction, filters, sort, page);
        ListingEngine::list(pool, &plan).await
    }
}
