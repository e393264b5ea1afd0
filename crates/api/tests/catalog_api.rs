//! HTTP-level integration tests for the customer and product resources
//! and the health endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_ok(pool: SqlitePool) {
    let resp = get(common::build_test_app(pool), "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_list_customers(pool: SqlitePool) {
    let resp = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/customers",
        serde_json::json!({"name": "Moscow City Hall"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert_eq!(json["data"]["name"], "Moscow City Hall");
    assert!(json["data"]["id"].is_number());

    let resp = get(common::build_test_app(pool), "/api/v1/customers").await;
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_customer_name_is_rejected(pool: SqlitePool) {
    let resp = post_json(
        common::build_test_app(pool),
        "/api/v1/customers",
        serde_json::json!({"name": "   "}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_customer_is_idempotent(pool: SqlitePool) {
    let resp = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/customers",
        serde_json::json!({"name": "Skolkovo"}),
    )
    .await;
    let id = body_json(resp).await["data"]["id"].as_i64().unwrap();

    let resp = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/customers/{id}"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/customers/{id}"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get(
        common::build_test_app(pool),
        &format!("/api/v1/customers/{id}"),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_type_round_trips(pool: SqlitePool) {
    let resp = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/products",
        serde_json::json!({"name": "Planed Boards", "type": "Planed Boards"}),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert_eq!(json["data"]["type"], "Planed Boards");
    let id = json["data"]["id"].as_i64().unwrap();

    let resp = get(
        common::build_test_app(pool),
        &format!("/api/v1/products/{id}"),
    )
    .await;
    let json = body_json(resp).await;
    assert_eq!(json["data"]["type"], "Planed Boards");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_product_name_conflicts(pool: SqlitePool) {
    let body = serde_json::json!({"name": "Pellets"});

    let resp = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/products",
        body.clone(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = post_json(common::build_test_app(pool), "/api/v1/products", body).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let json = body_json(resp).await;
    assert_eq!(json["code"], "CONFLICT");
}
