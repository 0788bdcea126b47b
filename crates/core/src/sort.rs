//! Closed set of listing sort keys and their `ORDER BY` rendering.
//!
//! Every ordering ends in an explicit id tie-break, so two rows never
//! compare equal and page boundaries are stable for a fixed snapshot.

use serde::Serialize;

/// A named listing order. Unknown names resolve to [`SortKey::DateDesc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    RatingDesc,
    PopularityDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::RatingDesc,
        SortKey::PopularityDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::TitleAsc => "title_asc",
            SortKey::TitleDesc => "title_desc",
            SortKey::RatingDesc => "rating_desc",
            SortKey::PopularityDesc => "popularity_desc",
        }
    }

    /// Resolve a caller-supplied key. Never fails: anything unrecognized
    /// (including absent or differently-cased input) is `date_desc`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return SortKey::default();
        };
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == raw)
            .unwrap_or_default()
    }
}

/// The concrete columns a listing exposes to the sort policy.
///
/// Keys whose columns a listing lacks degrade to `date_desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortColumns {
    pub id: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub rating: Option<&'static str>,
    pub reviews: Option<&'static str>,
    pub favorites: Option<&'static str>,
}

impl SortColumns {
    /// The key that will actually be applied for this listing.
    pub fn resolve(&self, key: SortKey) -> SortKey {
        match key {
            SortKey::RatingDesc if self.rating.is_none() || self.reviews.is_none() => {
                SortKey::DateDesc
            }
            SortKey::PopularityDesc if self.favorites.is_none() || self.reviews.is_none() => {
                SortKey::DateDesc
            }
            other => other,
        }
    }

    /// Render `ORDER BY ...` for `key`.
    pub fn order_by(&self, key: SortKey) -> String {
        let id = self.id;
        let date = self.date;
        let title = self.title;

        // A listing keyed by id has nothing left to break ties on.
        let by_date = |dir: &str| {
            if date == id {
                format!("{date} {dir}")
            } else {
                format!("{date} {dir}, {id} {dir}")
            }
        };

        let terms = match (self.resolve(key), self.rating, self.reviews, self.favorites) {
            (SortKey::RatingDesc, Some(rating), Some(reviews), _) => {
                format!("{rating} DESC, {reviews} DESC, {id} ASC")
            }
            (SortKey::PopularityDesc, _, Some(reviews), Some(favorites)) => {
                format!("{favorites} DESC, {reviews} DESC, {}", by_date("DESC"))
            }
            (SortKey::DateAsc, ..) => by_date("ASC"),
            (SortKey::TitleAsc, ..) => format!("{title} ASC, {id} ASC"),
            (SortKey::TitleDesc, ..) => format!("{title} DESC, {id} ASC"),
            _ => by_date("DESC"),
        };
        format!("ORDER BY {terms}")
    }
}
