//! Shared response envelope types for API handlers.
//!
//! Listing endpoints answer with [`PageResponse`]; other successful responses
//! use [`SuccessResponse`]. Errors never use these types (see
//! [`crate::error::AppError`]).

use marquee_core::pagination::Page;
use serde::Serialize;

/// `{ "success": true, "data": T }`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true, "data": [..], "total", "page", "limit", "meta"? }`.
///
/// `total` counts the whole filtered set, independent of the window.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize, M: Serialize = ()> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<M>,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(page: Page<T>) -> Self {
        Self {
            success: true,
            data: page.items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            meta: None,
        }
    }

    /// Attach endpoint-specific metadata.
    pub fn with_meta<M: Serialize>(self, meta: M) -> PageResponse<T, M> {
        PageResponse {
            success: self.success,
            data: self.data,
            total: self.total,
            page: self.page,
            limit: self.limit,
            meta: Some(meta),
        }
    }
}
