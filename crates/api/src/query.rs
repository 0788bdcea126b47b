//! Query-string types and parsing helpers shared by the handlers.
//!
//! Every field is taken as a raw string and parsed with
//! [`marquee_core::params`], so malformed values produce the standard
//! `VALIDATION_ERROR` envelope. Parameter names are accepted in both their
//! Spanish and English spellings (`pagina`/`page`, `limite`/`limit`,
//! `busqueda`/`search`, `ordenar`/`sort`).

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use marquee_core::error::CoreError;
use marquee_core::pagination::PageRequest;
use marquee_core::params::parse_int;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Unwrap a `Query` extraction, mapping its rejection to the error envelope.
pub fn parse_query<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// Build the page window from raw `page` / `limit` values.
pub fn page_request(page: Option<&str>, limit: Option<&str>) -> Result<PageRequest, CoreError> {
    Ok(PageRequest::new(
        parse_int(page, "page")?,
        parse_int(limit, "limit")?,
    ))
}

/// `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct MovieQuery {
    #[serde(alias = "busqueda")]
    pub search: Option<String>,
    #[serde(rename = "genero", alias = "genre")]
    pub genre: Option<String>,
    pub mine: Option<String>,
    #[serde(rename = "ordenar", alias = "sort")]
    pub sort: Option<String>,
    #[serde(alias = "pagina")]
    pub page: Option<String>,
    #[serde(alias = "limite")]
    pub limit: Option<String>,
}

/// `GET /favorites`.
#[derive(Debug, Default, Deserialize)]
pub struct FavoriteQuery {
    #[serde(rename = "busqueda", alias = "search")]
    pub search: Option<String>,
    #[serde(rename = "genero", alias = "genre")]
    pub genre: Option<String>,
    #[serde(rename = "ordenar", alias = "sort")]
    pub sort: Option<String>,
    #[serde(rename = "pagina", alias = "page")]
    pub page: Option<String>,
    #[serde(rename = "limite", alias = "limit")]
    pub limit: Option<String>,
}

/// `GET /follows`.
#[derive(Debug, Default, Deserialize)]
pub struct FollowQuery {
    /// `siguiendo` (default) or `seguidores`.
    pub tipo: Option<String>,
    /// Target user; defaults to the caller.
    #[serde(rename = "usuario", alias = "user")]
    pub user: Option<String>,
    #[serde(rename = "busqueda", alias = "search")]
    pub search: Option<String>,
    #[serde(rename = "ordenar", alias = "sort")]
    pub sort: Option<String>,
    #[serde(rename = "pagina", alias = "page")]
    pub page: Option<String>,
    #[serde(rename = "limite", alias = "limit")]
    pub limit: Option<String>,
}

/// `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub tipo: Option<String>,
    #[serde(rename = "limite", alias = "limit")]
    pub limit: Option<String>,
}

/// `GET /genres` and `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct BasicListQuery {
    #[serde(alias = "busqueda")]
    pub search: Option<String>,
    #[serde(rename = "ordenar", alias = "sort")]
    pub sort: Option<String>,
    #[serde(alias = "pagina")]
    pub page: Option<String>,
    #[serde(alias = "limite")]
    pub limit: Option<String>,
}

/// `GET /reviews`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    #[serde(alias = "busqueda")]
    pub search: Option<String>,
    #[serde(rename = "pelicula", alias = "movie")]
    pub movie: Option<String>,
    #[serde(rename = "usuario", alias = "user")]
    pub user: Option<String>,
    #[serde(rename = "ordenar", alias = "sort")]
    pub sort: Option<String>,
    #[serde(alias = "pagina")]
    pub page: Option<String>,
    #[serde(alias = "limite")]
    pub limit: Option<String>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use marquee_core::pagination::MAX_PAGE_SIZE;

    use super::*;

    #[test]
    fn page_request_clamps_numeric_values() {
        let window = page_request(Some("0"), Some("500")).unwrap();
        assert_eq!(window.page, 1);
        assert_eq!(window.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn page_request_rejects_non_numeric_values() {
        assert_matches!(page_request(Some("two"), None), Err(CoreError::Validation(_)));
        assert_matches!(page_request(None, Some("ten")), Err(CoreError::Validation(_)));
    }
}
