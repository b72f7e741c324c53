// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_db;
use super::helpers::in_memory_cache::InMemoryCache;
use duostore::domain::models::user::NewUser;
use duostore::domain::repositories::repository_error::RepositoryError;
use duostore::domain::repositories::unit_of_work::{within, UnitOfWork};
use duostore::domain::repositories::user_repository::UserRepository;
use duostore::infrastructure::database::session::SeaOrmSession;
use duostore::infrastructure::repositories::user_repo_impl::UserRepoImpl;
use duostore::infrastructure::unit_of_work::sea_orm_unit_of_work::SeaOrmUnitOfWork;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use uuid::Uuid;

fn repo_and_uow(db: &Arc<DatabaseConnection>) -> (UserRepoImpl, SeaOrmUnitOfWork, SeaOrmSession) {
    let session = SeaOrmSession::new(db.clone());
    let repo = UserRepoImpl::new(session.clone(), Arc::new(InMemoryCache::default()));
    let uow = SeaOrmUnitOfWork::new(session.clone());
    (repo, uow, session)
}

async fn count_from_fresh_session(db: &Arc<DatabaseConnection>) -> u64 {
    let (repo, uow, _) = repo_and_uow(db);
    within(&uow, async { repo.count().await })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_failed_scope_discards_writes() {
    let test_db = create_test_db().await;
    let (repo, uow, session) = repo_and_uow(&test_db.db);

    let result: Result<(), RepositoryError> = within(&uow, async {
        repo.create(NewUser {
            name: "alice".to_string(),
        })
        .await?;
        repo.delete(Uuid::new_v4()).await
    })
    .await;

    assert!(result.unwrap_err().is_not_found());
    assert!(!session.in_transaction().await);
    assert_eq!(count_from_fresh_session(&test_db.db).await, 0);
}

#[tokio::test]
async fn test_committed_scope_persists_writes() {
    let test_db = create_test_db().await;
    let (repo, uow, session) = repo_and_uow(&test_db.db);

    let created = within(&uow, async {
        let user = repo
            .create(NewUser {
                name: "bob".to_string(),
            })
            .await?;
        uow.commit().await?;
        Ok::<_, RepositoryError>(user)
    })
    .await
    .unwrap();

    assert!(!session.in_transaction().await);
    assert_eq!(count_from_fresh_session(&test_db.db).await, 1);

    let (other_repo, other_uow, _) = repo_and_uow(&test_db.db);
    let fetched = within(&other_uow, async { other_repo.get_by_id(created.id()).await })
        .await
        .unwrap();
    assert_eq!(fetched, Some(created));
}

/// 正常退出但未提交的写入同样被丢弃
#[tokio::test]
async fn test_completed_scope_without_commit_discards_writes() {
    let test_db = create_test_db().await;
    let (repo, uow, _) = repo_and_uow(&test_db.db);

    within(&uow, async {
        repo.create(NewUser {
            name: "carol".to_string(),
        })
        .await
    })
    .await
    .unwrap();

    assert_eq!(count_from_fresh_session(&test_db.db).await, 0);
}

#[tokio::test]
async fn test_writes_after_commit_need_another_commit() {
    let test_db = create_test_db().await;
    let (repo, uow, _) = repo_and_uow(&test_db.db);

    within(&uow, async {
        repo.create(NewUser {
            name: "first".to_string(),
        })
        .await?;
        uow.commit().await?;
        repo.create(NewUser {
            name: "second".to_string(),
        })
        .await?;
        Ok::<_, RepositoryError>(())
    })
    .await
    .unwrap();

    assert_eq!(count_from_fresh_session(&test_db.db).await, 1);
}
