//! Global search hits and the grouped response.
//!
//! Hits reuse the listing rows of their kind plus the relevance tier the
//! query assigned (1 = prefix match, 2 = substring match).

use marquee_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

use super::movie::{MovieItem, MovieRow};
use super::review::{ReviewItem, ReviewRow};
use super::user::{UserItem, UserRow};

#[derive(Debug, Clone, FromRow)]
pub struct MovieHitRow {
    pub relevance_tier: i32,
    #[sqlx(flatten)]
    pub movie: MovieRow,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserHitRow {
    pub relevance_tier: i32,
    #[sqlx(flatten)]
    pub user: UserRow,
}

#[derive(Debug, Clone, FromRow)]
pub struct ReviewHitRow {
    pub relevance_tier: i32,
    #[sqlx(flatten)]
    pub review: ReviewRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieHit {
    pub relevance_tier: i32,
    #[serde(flatten)]
    pub movie: MovieItem,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserHit {
    pub relevance_tier: i32,
    #[serde(flatten)]
    pub user: UserItem,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewHit {
    pub relevance_tier: i32,
    #[serde(flatten)]
    pub review: ReviewItem,
}

/// One search hit, tagged with its kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchResult {
    Movie(MovieHit),
    User(UserHit),
    Review(ReviewHit),
}

impl MovieHitRow {
    pub fn into_result(self, now: Timestamp) -> SearchResult {
        SearchResult::Movie(MovieHit {
            relevance_tier: self.relevance_tier,
            movie: self.movie.into_item(now),
        })
    }
}

impl UserHitRow {
    pub fn into_result(self, now: Timestamp) -> SearchResult {
        SearchResult::User(UserHit {
            relevance_tier: self.relevance_tier,
            user: self.user.into_item(now),
        })
    }
}

impl ReviewHitRow {
    pub fn into_result(self, now: Timestamp) -> SearchResult {
        SearchResult::Review(ReviewHit {
            relevance_tier: self.relevance_tier,
            review: self.review.into_item(now),
        })
    }
}

/// Search results grouped by kind. Kinds that were not requested are `None`
/// and omitted from the serialized output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<SearchResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<SearchResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<SearchResult>>,
}

impl SearchResults {
    /// Sum of the group sizes.
    pub fn total_results(&self) -> usize {
        [&self.movies, &self.users, &self.reviews]
            .into_iter()
            .flatten()
            .map(Vec::len)
            .sum()
    }
}
