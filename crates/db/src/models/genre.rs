//! Genre listing rows and items.

use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct GenreRow {
    pub id: DbId,
    pub name: String,
    pub color_hex: String,
    pub movie_count: i64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenreStats {
    pub movie_count: i64,
    pub average_rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenreItem {
    pub id: DbId,
    pub name: String,
    pub color_hex: String,
    pub stats: GenreStats,
}

impl GenreRow {
    pub fn into_item(self) -> GenreItem {
        GenreItem {
            id: self.id,
            name: self.name,
            color_hex: self.color_hex,
            stats: GenreStats {
                movie_count: self.movie_count,
                average_rating: self.average_rating,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenreFilters {
    pub search: Option<String>,
}
