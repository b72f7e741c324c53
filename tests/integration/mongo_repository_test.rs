// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 需要 Docker：使用 `cargo test -- --ignored` 运行
//!
//! 这里使用单节点 MongoDB，服务层统一使用空工作单元；
//! 事务型工作单元见 `mongo_unit_of_work_test`。

use super::helpers::create_test_db;
use super::helpers::in_memory_cache::InMemoryCache;
use super::helpers::mongo::{start_mongo, MongoNode};
use axum::http::StatusCode;
use axum_test::TestServer;
use duostore::application::dto::player_dto::{PlayerIn, PlayerOut, PlayerUpdate};
use duostore::application::errors::ServiceError;
use duostore::application::services::player_service::PlayerService;
use duostore::domain::models::pagination::Pagination;
use duostore::domain::models::player::{NewPlayer, PlayerChanges};
use duostore::domain::repositories::key_value_cache::KeyValueCache;
use duostore::domain::repositories::player_repository::PlayerRepository;
use duostore::infrastructure::container::ServiceContainer;
use duostore::infrastructure::mongo::documents::player::PlayerDocument;
use duostore::infrastructure::mongo::documents::MongoDocument;
use duostore::infrastructure::mongo::migrations::rename_legacy_player_fields;
use duostore::infrastructure::mongo::session::MongoSession;
use duostore::infrastructure::repositories::player_repo_impl::PlayerRepoImpl;
use duostore::infrastructure::unit_of_work::mongo_unit_of_work::NoopUnitOfWork;
use duostore::presentation::routes;
use mongodb::bson::{doc, Document};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

async fn player_repo(node: &MongoNode) -> PlayerRepoImpl {
    let session = MongoSession::start(&node.client, node.database.clone())
        .await
        .expect("Failed to start session");
    PlayerRepoImpl::new(session)
}

#[tokio::test]
#[ignore]
async fn test_player_crud() {
    let node = start_mongo().await;
    let repo = player_repo(&node).await;

    let created = repo
        .create(NewPlayer {
            color: "red".to_string(),
            is_alive: true,
        })
        .await
        .unwrap();
    assert_eq!(
        repo.get_by_id(created.id()).await.unwrap(),
        Some(created.clone())
    );
    assert_eq!(repo.count().await.unwrap(), 1);

    let updated = repo
        .update(
            created.id(),
            PlayerChanges {
                color: None,
                is_alive: Some(false),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.color(), "red");
    assert!(!updated.is_alive());

    repo.delete(created.id()).await.unwrap();
    assert_eq!(repo.get_by_id(created.id()).await.unwrap(), None);
    assert!(repo.delete(created.id()).await.unwrap_err().is_not_found());
}

#[tokio::test]
#[ignore]
async fn test_player_pagination_and_missing_update() {
    let node = start_mongo().await;
    let repo = player_repo(&node).await;

    for color in ["red", "blue", "green"] {
        repo.create(NewPlayer {
            color: color.to_string(),
            is_alive: true,
        })
        .await
        .unwrap();
    }

    let first = repo.get_all(Some(Pagination::new(2, 0))).await.unwrap();
    let second = repo.get_all(Some(Pagination::new(2, 2))).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    let ids: HashSet<Uuid> = first.iter().chain(second.iter()).map(|p| p.id()).collect();
    assert_eq!(ids.len(), 3);

    let missing = Uuid::new_v4();
    let err = repo
        .update(
            missing,
            PlayerChanges {
                color: Some("blue".to_string()),
                is_alive: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Player with id={} not found", missing)
    );
}

#[tokio::test]
#[ignore]
async fn test_legacy_color_field_is_renamed() {
    let node = start_mongo().await;
    let raw = node
        .database
        .collection::<Document>(PlayerDocument::COLLECTION);
    let legacy = PlayerDocument::new("yellow".to_string(), true);
    let id = Uuid::from_bytes(legacy.id.bytes());
    raw.insert_one(doc! {
        "_id": legacy.id,
        "clor": "yellow",
        "is_alive": true,
        "created_at": legacy.created_at,
    })
    .await
    .unwrap();

    assert_eq!(rename_legacy_player_fields(&node.database).await.unwrap(), 1);
    assert_eq!(rename_legacy_player_fields(&node.database).await.unwrap(), 0);

    let repo = player_repo(&node).await;
    let player = repo.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(player.color(), "yellow");
}

#[tokio::test]
#[ignore]
async fn test_player_service_with_noop_unit_of_work() {
    let node = start_mongo().await;
    let service = PlayerService::new(player_repo(&node).await, Box::new(NoopUnitOfWork));

    let created = service
        .create(PlayerIn {
            color: "Blue".to_string(),
            is_alive: true,
        })
        .await
        .unwrap();
    let updated = service
        .update(
            created.id,
            PlayerUpdate {
                color: Some("purple".to_string()),
                is_alive: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.color, "purple");

    let err = service
        .create(PlayerIn {
            color: "magenta".to_string(),
            is_alive: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test]
#[ignore]
async fn test_player_routes() {
    let node = start_mongo().await;
    let test_db = create_test_db().await;
    let container = Arc::new(ServiceContainer::new(
        test_db.db.clone(),
        node.client.clone(),
        node.database.clone(),
        Arc::new(InMemoryCache::default()) as Arc<dyn KeyValueCache>,
        false,
    ));
    let server = TestServer::new(routes::routes(container)).expect("failed to start test server");

    let response = server
        .post("/v1/players")
        .json(&json!({ "color": "magenta", "is_alive": true }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "Player with color 'magenta' cannot be added" })
    );

    let response = server
        .post("/v1/players")
        .json(&json!({ "color": "green", "is_alive": false }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: PlayerOut = response.json();

    let response = server.get(&format!("/v1/players/{}", created.id)).await;
    assert_eq!(response.json::<PlayerOut>(), created);

    let response = server.get("/v1/players/count").await;
    assert_eq!(response.json::<u64>(), 1);
}
