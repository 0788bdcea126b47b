//! Domain logic for the Marquee listing & search service.
//!
//! This crate has no database or HTTP dependencies. It owns the query
//! building blocks (predicates, aggregate subselects, sort policy, listing
//! plans, search tiers) and the result-shaping helpers, so the repository
//! layer only has to bind values and execute.

pub mod aggregate;
pub mod error;
pub mod listing;
pub mod pagination;
pub mod params;
pub mod predicate;
pub mod search;
pub mod shaping;
pub mod sort;
pub mod types;
