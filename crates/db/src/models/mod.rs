//! Row and item types.
//!
//! Each submodule contains:
//! - a flat `FromRow` row matching the listing's select list (stats included)
//! - a `Serialize` item with stats nested under `stats` and display fields
//!   (relative dates, previews) filled in, built by `into_item`
//! - the filter struct its repository accepts

pub mod favorite;
pub mod follow;
pub mod genre;
pub mod movie;
pub mod review;
pub mod search;
pub mod user;
