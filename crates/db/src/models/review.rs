//! Review listing rows and items.

use marquee_core::shaping::{time_ago, truncate_preview, PREVIEW_LENGTH};
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: DbId,
    pub title: String,
    pub body_text: String,
    pub score: i16,
    pub like_count: i32,
    pub dislike_count: i32,
    pub created_at: Timestamp,
    pub movie_id: DbId,
    pub movie_title: String,
    pub user_id: DbId,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewMovieRef {
    pub id: DbId,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewAuthorRef {
    pub id: DbId,
    pub username: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReviewStats {
    pub like_count: i32,
    pub dislike_count: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewItem {
    pub id: DbId,
    pub title: String,
    pub body_preview: String,
    pub score: i16,
    pub created_at: Timestamp,
    pub created_ago: String,
    pub movie: ReviewMovieRef,
    pub author: ReviewAuthorRef,
    pub stats: ReviewStats,
}

impl ReviewRow {
    pub fn into_item(self, now: Timestamp) -> ReviewItem {
        ReviewItem {
            id: self.id,
            body_preview: truncate_preview(&self.body_text, PREVIEW_LENGTH),
            created_ago: time_ago(Some(self.created_at), now),
            title: self.title,
            score: self.score,
            created_at: self.created_at,
            movie: ReviewMovieRef {
                id: self.movie_id,
                title: self.movie_title,
            },
            author: ReviewAuthorRef {
                id: self.user_id,
                username: self.username,
            },
            stats: ReviewStats {
                like_count: self.like_count,
                dislike_count: self.dislike_count,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewFilters {
    /// Substring of review title or body.
    pub search: Option<String>,
    pub movie_id: Option<DbId>,
    pub user_id: Option<DbId>,
}
