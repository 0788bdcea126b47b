//! Favorite listing rows and items: the caller's favorite movies.

use marquee_core::shaping::time_ago;
use marquee_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::movie::{MovieItem, MovieRow};

#[derive(Debug, Clone, FromRow)]
pub struct FavoriteRow {
    pub favorite_id: DbId,
    pub added_at: Timestamp,
    #[sqlx(flatten)]
    pub movie: MovieRow,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteItem {
    pub favorite_id: DbId,
    pub added_at: Timestamp,
    pub added_ago: String,
    pub movie: MovieItem,
}

impl FavoriteRow {
    pub fn into_item(self, now: Timestamp) -> FavoriteItem {
        FavoriteItem {
            favorite_id: self.favorite_id,
            added_ago: time_ago(Some(self.added_at), now),
            added_at: self.added_at,
            movie: self.movie.into_item(now),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FavoriteFilters {
    /// Substring of movie title or director.
    pub search: Option<String>,
    pub genre_id: Option<DbId>,
}
