//! Shared helpers for api integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use marquee_api::auth::jwt::{generate_access_token, JwtConfig};
use marquee_api::config::{LogFormat, ServerConfig};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        query_timeout_secs: 10,
        db_max_connections: 5,
        log_format: LogFormat::Text,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid bearer token for `user_id`.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, "user", &test_config().jwt).unwrap()
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn get_auth(app: Router, uri: &str, user_id: i64) -> Response<Body> {
    send(app, Method::GET, uri, Some(&token_for(user_id))).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn insert_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (username, email) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(format!("{username}@example.com"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_genre(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO genres (name, color_hex) VALUES ($1, '#ff0000') RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_movie(pool: &PgPool, title: &str, genre_id: i64, creator: Option<i64>) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO movies (title, director, genre_id, creator_user_id, duration_minutes, synopsis) \
         VALUES ($1, 'Someone', $2, $3, 135, 'Synopsis.') RETURNING id",
    )
    .bind(title)
    .bind(genre_id)
    .bind(creator)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_review(pool: &PgPool, user_id: i64, movie_id: i64, score: i16) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO reviews (user_id, movie_id, score, title, body_text) \
         VALUES ($1, $2, $3, 'Review', 'Body') RETURNING id",
    )
    .bind(user_id)
    .bind(movie_id)
    .bind(score)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_favorite(pool: &PgPool, user_id: i64, movie_id: i64) {
    sqlx::query("INSERT INTO favorites (user_id, movie_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(movie_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_follow(pool: &PgPool, follower_id: i64, followed_id: i64) {
    sqlx::query("INSERT INTO follows (follower_id, followed_id) VALUES ($1, $2)")
        .bind(follower_id)
        .bind(followed_id)
        .execute(pool)
        .await
        .unwrap();
}
