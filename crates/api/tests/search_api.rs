//! HTTP-level tests for global search.

mod common;

use axum::http::StatusCode;
use common::*;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_short_query_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let json = expect_json(get(app, "/api/v1/search?q=a").await, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_query_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_tipo_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/search?q=matrix&tipo=genres").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_results_are_grouped_and_ranked(pool: PgPool) {
    let genre = insert_genre(&pool, "Sci-Fi").await;
    insert_movie(&pool, "The Matrix Reloaded", genre, None).await;
    insert_movie(&pool, "Matrix", genre, None).await;
    insert_movie(&pool, "Inception", genre, None).await;
    insert_user(&pool, "matrixfan").await;

    let app = build_test_app(pool);
    let json = expect_json(get(app, "/api/v1/search?q=matrix").await, StatusCode::OK).await;

    assert_eq!(json["success"], true);
    let data = &json["data"];
    assert_eq!(data["query"], "matrix");
    assert_eq!(data["tipo"], "todos");
    assert_eq!(data["total_resultados"], 3);

    let movies = data["resultados"]["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0]["title"], "Matrix");
    assert_eq!(movies[0]["relevance_tier"], 1);
    assert_eq!(movies[0]["kind"], "movie");
    assert_eq!(movies[1]["title"], "The Matrix Reloaded");
    assert_eq!(movies[1]["relevance_tier"], 2);

    assert_eq!(data["resultados"]["users"][0]["username"], "matrixfan");
    assert_eq!(data["resultados"]["reviews"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_spanish_tipo_limits_kinds(pool: PgPool) {
    let genre = insert_genre(&pool, "Sci-Fi").await;
    insert_movie(&pool, "Matrix", genre, None).await;

    let app = build_test_app(pool);
    let json = expect_json(
        get(app, "/api/v1/search?q=matrix&tipo=peliculas").await,
        StatusCode::OK,
    )
    .await;
    let data = &json["data"];
    assert_eq!(data["tipo"], "movies");
    assert!(data["resultados"].get("users").is_none());
    assert!(data["resultados"].get("reviews").is_none());
    assert_eq!(data["resultados"]["movies"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_limite_caps_each_group(pool: PgPool) {
    let genre = insert_genre(&pool, "Drama").await;
    for i in 0..3 {
        insert_movie(&pool, &format!("Saga {i}"), genre, None).await;
    }

    let app = build_test_app(pool);
    let json = expect_json(
        get(app, "/api/v1/search?q=saga&tipo=movies&limite=2").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(json["data"]["resultados"]["movies"].as_array().unwrap().len(), 2);
}
