//! User listing rows and items. Email and role are never exposed here.

use marquee_core::shaping::time_ago;
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: DbId,
    pub username: String,
    pub full_name: Option<String>,
    pub registered_at: Timestamp,
    pub movie_count: i64,
    pub review_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserStats {
    pub movie_count: i64,
    pub review_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserItem {
    pub id: DbId,
    pub username: String,
    pub full_name: Option<String>,
    pub registered_at: Timestamp,
    pub member_for: String,
    pub stats: UserStats,
}

impl UserRow {
    pub fn into_item(self, now: Timestamp) -> UserItem {
        UserItem {
            member_for: time_ago(Some(self.registered_at), now),
            id: self.id,
            username: self.username,
            full_name: self.full_name,
            registered_at: self.registered_at,
            stats: UserStats {
                movie_count: self.movie_count,
                review_count: self.review_count,
                follower_count: self.follower_count,
                following_count: self.following_count,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilters {
    /// Substring of username or full name.
    pub search: Option<String>,
}
