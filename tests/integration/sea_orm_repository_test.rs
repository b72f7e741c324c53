// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_db;
use super::helpers::in_memory_cache::InMemoryCache;
use duostore::domain::models::pagination::Pagination;
use duostore::domain::models::user::{NewUser, UserChanges};
use duostore::domain::repositories::repository_error::RepositoryError;
use duostore::domain::repositories::user_repository::UserRepository;
use duostore::infrastructure::database::entities::user;
use duostore::infrastructure::database::session::SeaOrmSession;
use duostore::infrastructure::repositories::sea_orm_repository::SeaOrmRepository;
use duostore::infrastructure::repositories::user_repo_impl::UserRepoImpl;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

fn new_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
    }
}

/// 分页窗口互不重叠，合起来正好覆盖全部记录
#[tokio::test]
async fn test_get_all_pagination_windows_cover_count() {
    let test_db = create_test_db().await;
    let repo = UserRepoImpl::new(
        SeaOrmSession::new(test_db.db.clone()),
        Arc::new(InMemoryCache::default()),
    );

    for i in 0..5 {
        repo.create(new_user(&format!("user-{}", i))).await.unwrap();
    }

    let mut seen = HashSet::new();
    let mut pagination = Pagination::new(2, 0);
    loop {
        let page = repo.get_all(Some(pagination)).await.unwrap();
        assert!(page.len() as u64 <= pagination.limit());
        if page.is_empty() {
            break;
        }
        for user in page {
            assert!(seen.insert(user.id()), "user returned twice across pages");
        }
        pagination = pagination.next_page();
    }

    assert_eq!(seen.len() as u64, repo.count().await.unwrap());
    assert_eq!(repo.get_all(None).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_then_get_by_id_round_trip() {
    let test_db = create_test_db().await;
    let repo = UserRepoImpl::new(
        SeaOrmSession::new(test_db.db.clone()),
        Arc::new(InMemoryCache::default()),
    );

    let created = repo.create(new_user("alice")).await.unwrap();
    let fetched = repo.get_by_id(created.id()).await.unwrap();

    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(created.name(), "alice");
    assert_eq!(created.created_at(), created.updated_at());
}

#[tokio::test]
async fn test_absent_id_semantics() {
    let test_db = create_test_db().await;
    let repo = UserRepoImpl::new(
        SeaOrmSession::new(test_db.db.clone()),
        Arc::new(InMemoryCache::default()),
    );
    let missing = Uuid::new_v4();

    assert_eq!(repo.get_by_id(missing).await.unwrap(), None);

    let err = repo
        .update(
            missing,
            UserChanges {
                name: Some("ghost".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), format!("User with id={} not found", missing));

    let err = repo.delete(missing).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() {
    let test_db = create_test_db().await;
    let repo = UserRepoImpl::new(
        SeaOrmSession::new(test_db.db.clone()),
        Arc::new(InMemoryCache::default()),
    );
    let created = repo.create(new_user("bob")).await.unwrap();

    let untouched = repo
        .update(created.id(), UserChanges::default())
        .await
        .unwrap();
    assert_eq!(untouched.name(), "bob");
    assert!(untouched.updated_at() >= created.updated_at());
    assert_eq!(untouched.created_at(), created.created_at());

    let renamed = repo
        .update(
            created.id(),
            UserChanges {
                name: Some("robert".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name(), "robert");
    assert_eq!(
        repo.get_by_id(created.id()).await.unwrap().unwrap().name(),
        "robert"
    );
}

#[tokio::test]
async fn test_delete_removes_record() {
    let test_db = create_test_db().await;
    let repo = UserRepoImpl::new(
        SeaOrmSession::new(test_db.db.clone()),
        Arc::new(InMemoryCache::default()),
    );
    let created = repo.create(new_user("carol")).await.unwrap();

    repo.delete(created.id()).await.unwrap();

    assert_eq!(repo.get_by_id(created.id()).await.unwrap(), None);
    assert!(repo.delete(created.id()).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_create_many_with_empty_batch_is_noop() {
    let test_db = create_test_db().await;
    let repo = UserRepoImpl::new(
        SeaOrmSession::new(test_db.db.clone()),
        Arc::new(InMemoryCache::default()),
    );

    assert!(repo.create_many(Vec::new()).await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);

    let created = repo
        .create_many(vec![new_user("a"), new_user("b")])
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_empty_changeset_on_missing_record_fails_after_update() {
    let test_db = create_test_db().await;
    let base =
        SeaOrmRepository::<user::Entity>::new(SeaOrmSession::new(test_db.db.clone()), "User");
    let missing = Uuid::new_v4();

    let err = base.update_by_id(missing, Vec::new(), true).await.unwrap_err();

    assert!(
        matches!(err, RepositoryError::NotFound(ref m) if m == &format!("User with id={} not found after update", missing))
    );
}

/// 不排除缺省字段时，`None` 被写成 NULL，触发非空约束
#[tokio::test]
async fn test_absent_field_written_as_null_when_not_excluded() {
    let test_db = create_test_db().await;
    let session = SeaOrmSession::new(test_db.db.clone());
    let repo = UserRepoImpl::new(session.clone(), Arc::new(InMemoryCache::default()));
    let created = repo.create(new_user("dave")).await.unwrap();

    let base = SeaOrmRepository::<user::Entity>::new(session, "User");
    let err = base
        .update_by_id(created.id(), vec![(user::Column::Name, None)], false)
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Database(_)));
}
