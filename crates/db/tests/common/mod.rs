//! Shared fixtures for db integration tests.
//!
//! Rows are inserted with plain SQL so the tests depend only on the schema,
//! not on any write path.

#![allow(dead_code)]

use sqlx::PgPool;

pub async fn insert_user(pool: &PgPool, username: &str, full_name: Option<&str>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, full_name, email) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind(full_name)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_genre(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert a movie created `age_days` ago.
pub async fn insert_movie(
    pool: &PgPool,
    title: &str,
    director: Option<&str>,
    genre_id: i64,
    creator: Option<i64>,
    age_days: i32,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO movies (title, director, genre_id, creator_user_id, duration_minutes, \
         synopsis, created_at) \
         VALUES ($1, $2, $3, $4, 120, 'A film.', NOW() - make_interval(days => $5)) \
         RETURNING id",
    )
    .bind(title)
    .bind(director)
    .bind(genre_id)
    .bind(creator)
    .bind(age_days)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn set_synopsis(pool: &PgPool, movie_id: i64, synopsis: &str) {
    sqlx::query("UPDATE movies SET synopsis = $2 WHERE id = $1")
        .bind(movie_id)
        .bind(synopsis)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_review(
    pool: &PgPool,
    user_id: i64,
    movie_id: i64,
    score: i16,
    title: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO reviews (user_id, movie_id, score, title, body_text) \
         VALUES ($1, $2, $3, $4, 'Body of the review.') RETURNING id",
    )
    .bind(user_id)
    .bind(movie_id)
    .bind(score)
    .bind(title)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_favorite(pool: &PgPool, user_id: i64, movie_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO favorites (user_id, movie_id) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(movie_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_follow(pool: &PgPool, follower_id: i64, followed_id: i64) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO follows (follower_id, followed_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(follower_id)
    .bind(followed_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Soft-delete a row by flipping its `active` flag.
pub async fn deactivate(pool: &PgPool, table: &str, id: i64) {
    sqlx::query(&format!("UPDATE {table} SET active = FALSE WHERE id = $1"))
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}
