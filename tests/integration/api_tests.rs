// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use duostore::application::dto::user_dto::UserOut;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_create_then_get_user() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/users")
        .json(&json!({ "name": "alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: UserOut = response.json();
    assert_eq!(created.name, "alice");

    let response = app.server.get(&format!("/v1/users/{}", created.id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<UserOut>(), created);
}

#[tokio::test]
async fn test_get_unknown_user_returns_404() {
    let app = create_test_app().await;
    let id = Uuid::new_v4();

    let response = app.server.get(&format!("/v1/users/{}", id)).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": format!("User with id={} not found", id) })
    );
}

#[tokio::test]
async fn test_list_users_with_pagination() {
    let app = create_test_app().await;
    for name in ["a", "b", "c"] {
        app.server
            .post("/v1/users")
            .json(&json!({ "name": name }))
            .await;
    }

    let response = app.server.get("/v1/users?limit=2&offset=0").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<UserOut>>().len(), 2);

    let response = app.server.get("/v1/users?limit=2&offset=2").await;
    assert_eq!(response.json::<Vec<UserOut>>().len(), 1);

    let response = app.server.get("/v1/users").await;
    assert_eq!(response.json::<Vec<UserOut>>().len(), 3);
}

#[tokio::test]
async fn test_zero_limit_is_rejected() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/users?limit=0").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_update_user() {
    let app = create_test_app().await;
    let created: UserOut = app
        .server
        .post("/v1/users")
        .json(&json!({ "name": "bob" }))
        .await
        .json();

    let response = app
        .server
        .put(&format!("/v1/users/{}", created.id))
        .json(&json!({ "name": "robert" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: UserOut = response.json();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "robert");
    assert_eq!(updated.created_at, created.created_at);

    let response = app
        .server
        .put(&format!("/v1/users/{}", Uuid::new_v4()))
        .json(&json!({ "name": "nobody" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user() {
    let app = create_test_app().await;
    let created: UserOut = app
        .server
        .post("/v1/users")
        .json(&json!({ "name": "carol" }))
        .await
        .json();
    let path = format!("/v1/users/{}", created.id);

    let response = app.server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.delete(&path).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_random_user_on_empty_store() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/users/random").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "No users in database" })
    );
}

#[tokio::test]
async fn test_random_user_is_cached() {
    let app = create_test_app().await;
    let created: UserOut = app
        .server
        .post("/v1/users")
        .json(&json!({ "name": "dave" }))
        .await
        .json();

    let first: UserOut = app.server.get("/v1/users/random").await.json();
    let second: UserOut = app.server.get("/v1/users/random").await.json();

    assert_eq!(first, created);
    assert_eq!(second, created);
    assert_eq!(app.cache.set_count(), 1);
}

#[tokio::test]
async fn test_batch_create_and_count() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/users/batch")
        .json(&json!([{ "name": "x" }, { "name": "y" }]))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Vec<UserOut>>().len(), 2);

    let response = app.server.get("/v1/users/count").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<u64>(), 2);
}

/// 批次中任一条目校验失败时整个批次都不写入
#[tokio::test]
async fn test_batch_with_invalid_entry_writes_nothing() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/users/batch")
        .json(&json!([{ "name": "ok" }, { "name": "" }]))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app.server.get("/v1/users/count").await;
    assert_eq!(response.json::<u64>(), 0);
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/v1/users")
        .json(&json!({ "name": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_uuid_is_rejected() {
    let app = create_test_app().await;

    let response = app.server.get("/v1/users/not-a-uuid").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
