//! Repository layer.
//!
//! Each repository is a zero-sized struct. Listing repositories expose a pure
//! `plan` that builds the [`ListingPlan`](marquee_core::listing::ListingPlan)
//! for a filter set, and an async `list` that runs it through the
//! [`ListingEngine`](crate::listing::ListingEngine) with `&PgPool`.

pub mod favorite_repo;
pub mod follow_repo;
pub mod genre_repo;
pub mod movie_repo;
pub mod review_repo;
pub mod search_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use follow_repo::FollowRepo;
pub use genre_repo::GenreRepo;
pub use movie_repo::MovieRepo;
pub use review_repo::ReviewRepo;
pub use search_repo::SearchRepo;
pub use user_repo::UserRepo;
