//! Movie listing rows and items.

use marquee_core::shaping::{format_duration, time_ago, truncate_preview, PREVIEW_LENGTH};
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A movie row with its genre and aggregate statistics.
#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: DbId,
    pub title: String,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub synopsis: Option<String>,
    pub creator_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub genre_id: DbId,
    pub genre_name: String,
    pub genre_color: String,
    pub average_rating: f64,
    pub review_count: i64,
    pub favorite_count: i64,
}

/// Compact genre reference embedded in movie items.
#[derive(Debug, Clone, Serialize)]
pub struct GenreRef {
    pub id: DbId,
    pub name: String,
    pub color_hex: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MovieStats {
    pub average_rating: f64,
    pub review_count: i64,
    pub favorite_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovieItem {
    pub id: DbId,
    pub title: String,
    pub director: Option<String>,
    pub release_year: Option<i32>,
    pub duration_minutes: Option<i32>,
    pub duration: Option<String>,
    pub synopsis: Option<String>,
    pub creator_user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub created_ago: String,
    pub genre: GenreRef,
    pub stats: MovieStats,
}

impl MovieRow {
    pub fn stats(&self) -> MovieStats {
        MovieStats {
            average_rating: self.average_rating,
            review_count: self.review_count,
            favorite_count: self.favorite_count,
        }
    }

    pub fn into_item(self, now: Timestamp) -> MovieItem {
        let stats = self.stats();
        MovieItem {
            id: self.id,
            duration: self.duration_minutes.map(format_duration),
            synopsis: self
                .synopsis
                .as_deref()
                .map(|s| truncate_preview(s, PREVIEW_LENGTH)),
            created_ago: time_ago(Some(self.created_at), now),
            title: self.title,
            director: self.director,
            release_year: self.release_year,
            duration_minutes: self.duration_minutes,
            creator_user_id: self.creator_user_id,
            created_at: self.created_at,
            genre: GenreRef {
                id: self.genre_id,
                name: self.genre_name,
                color_hex: self.genre_color,
            },
            stats,
        }
    }
}

/// Filters accepted by the movie listing.
#[derive(Debug, Clone, Default)]
pub struct MovieFilters {
    /// Substring of title or director.
    pub search: Option<String>,
    pub genre_id: Option<DbId>,
    /// Restrict to movies created by this user ("mine only").
    pub creator_id: Option<DbId>,
}
