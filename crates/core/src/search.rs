//! Global search constants, request validation, and relevance tiers.
//!
//! Search runs one query per requested kind and returns the results grouped
//! by kind. Within a kind, rows are ranked by tier first:
//!
//! - tier 1: the term is a prefix of a primary field;
//! - tier 2: the term appears anywhere in a primary or secondary field.
//!
//! Rows matching neither are excluded. Secondary ordering inside a tier is
//! kind-specific and lives with the query.

use serde::Serialize;

use crate::error::CoreError;
use crate::pagination::clamp_limit;
use crate::predicate::{contains_pattern, prefix_pattern};

/// Shortest accepted search term, in characters, after trimming.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Default per-kind result cap.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Maximum per-kind result cap.
pub const MAX_SEARCH_LIMIT: i64 = 50;

/// A searchable entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Movie,
    User,
    Review,
}

impl SearchKind {
    pub const ALL: [SearchKind; 3] = [SearchKind::Movie, SearchKind::User, SearchKind::Review];

    /// Plural name used for result groups and the `tipo` parameter.
    pub fn group_name(&self) -> &'static str {
        match self {
            SearchKind::Movie => "movies",
            SearchKind::User => "users",
            SearchKind::Review => "reviews",
        }
    }
}

/// The set of kinds a search covers, as requested through `tipo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KindSelection {
    #[serde(rename = "todos")]
    All,
    #[serde(rename = "movies")]
    Movies,
    #[serde(rename = "users")]
    Users,
    #[serde(rename = "reviews")]
    Reviews,
}

impl KindSelection {
    /// Parse a `tipo` value. Absent means all kinds; Spanish synonyms
    /// collapse onto the canonical names.
    pub fn parse(raw: Option<&str>) -> Result<Self, CoreError> {
        let Some(value) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(KindSelection::All);
        };
        match value.to_ascii_lowercase().as_str() {
            "todos" | "all" => Ok(KindSelection::All),
            "movies" | "peliculas" => Ok(KindSelection::Movies),
            "users" | "usuarios" => Ok(KindSelection::Users),
            "reviews" | "resenas" => Ok(KindSelection::Reviews),
            _ => Err(CoreError::Validation(format!(
                "Invalid tipo '{value}'. Must be one of: todos, movies, users, reviews"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KindSelection::All => "todos",
            KindSelection::Movies => "movies",
            KindSelection::Users => "users",
            KindSelection::Reviews => "reviews",
        }
    }

    pub fn includes(&self, kind: SearchKind) -> bool {
        match self {
            KindSelection::All => true,
            KindSelection::Movies => kind == SearchKind::Movie,
            KindSelection::Users => kind == SearchKind::User,
            KindSelection::Reviews => kind == SearchKind::Review,
        }
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub kinds: KindSelection,
    /// Per-kind cap, applied before grouping.
    pub limit: i64,
}

impl SearchRequest {
    /// Validate raw inputs. A term shorter than [`MIN_QUERY_LENGTH`]
    /// characters is rejected rather than answered with nothing.
    pub fn new(
        term: Option<&str>,
        kinds: KindSelection,
        limit: Option<i64>,
    ) -> Result<Self, CoreError> {
        let term = term.map(str::trim).unwrap_or_default();
        if term.chars().count() < MIN_QUERY_LENGTH {
            return Err(CoreError::Validation(format!(
                "Search query must be at least {MIN_QUERY_LENGTH} characters"
            )));
        }
        Ok(Self {
            term: term.to_string(),
            kinds,
            limit: clamp_limit(limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT),
        })
    }

    /// Bound pattern for tier-1 (prefix) tests.
    pub fn prefix_pattern(&self) -> String {
        prefix_pattern(&self.term)
    }

    /// Bound pattern for tier-2 (substring) tests.
    pub fn contains_pattern(&self) -> String {
        contains_pattern(&self.term)
    }
}

/// Which columns decide each tier for one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierColumns {
    /// Primary identifying fields; a prefix match here is tier 1.
    pub primary: &'static [&'static str],
    /// Secondary fields; a substring match here (or in a primary) is tier 2.
    pub secondary: &'static [&'static str],
}

impl TierColumns {
    /// `CASE WHEN <prefix on primary> THEN 1 ELSE 2 END`, prefix bound at `$prefix_param`.
    pub fn tier_expr(&self, prefix_param: usize) -> String {
        let prefix = self
            .primary
            .iter()
            .map(|c| format!("{c} ILIKE ${prefix_param}"))
            .collect::<Vec<_>>()
            .join(" OR ");
        format!("CASE WHEN {prefix} THEN 1 ELSE 2 END")
    }

    /// Substring test over primary and secondary fields, bound at `$contains_param`.
    ///
    /// A prefix match is also a substring match, so this alone decides
    /// whether a row is in the result at all.
    pub fn match_expr(&self, contains_param: usize) -> String {
        let all = self
            .primary
            .iter()
            .chain(self.secondary.iter())
            .map(|c| format!("{c} ILIKE ${contains_param}"))
            .collect::<Vec<_>>()
            .join(" OR ");
        format!("({all})")
    }
}

pub const MOVIE_TIERS: TierColumns = TierColumns {
    primary: &["m.title", "m.director"],
    secondary: &["m.synopsis"],
};

pub const USER_TIERS: TierColumns = TierColumns {
    primary: &["u.username"],
    secondary: &["u.full_name"],
};

pub const REVIEW_TIERS: TierColumns = TierColumns {
    primary: &["r.title"],
    secondary: &["r.body_text"],
};
