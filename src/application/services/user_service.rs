// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::user_dto::{UserIn, UserOut, UserUpdate};
use crate::application::errors::ServiceError;
use crate::domain::models::pagination::Pagination;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::unit_of_work::{within, UnitOfWork};
use crate::domain::repositories::user_repository::UserRepository;
use uuid::Uuid;

/// 用户服务
///
/// 每个请求构造一个实例。读操作只借用作用域管理会话生命周期，
/// 写操作在作用域内显式提交。
pub struct UserService<R: UserRepository> {
    repository: R,
    uow: Box<dyn UnitOfWork>,
}

impl<R: UserRepository> UserService<R> {
    /// 创建用户服务
    ///
    /// # 参数
    ///
    /// * `repository` - 用户仓库
    /// * `uow` - 与仓库共享会话的工作单元
    pub fn new(repository: R, uow: Box<dyn UnitOfWork>) -> Self {
        Self { repository, uow }
    }

    pub async fn get_all(&self, pagination: Pagination) -> Result<Vec<UserOut>, ServiceError> {
        within(self.uow.as_ref(), async {
            let users = self.repository.get_all(Some(pagination)).await?;
            Ok(users.into_iter().map(UserOut::from).collect())
        })
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserOut, ServiceError> {
        within(self.uow.as_ref(), async {
            self.repository
                .get_by_id(id)
                .await?
                .map(UserOut::from)
                .ok_or_else(|| ServiceError::from(RepositoryError::not_found("User", id)))
        })
        .await
    }

    /// 随机挑选一个用户（可能来自缓存）
    pub async fn get_random(&self) -> Result<UserOut, ServiceError> {
        within(self.uow.as_ref(), async {
            let user = self.repository.get_random_user().await?;
            Ok(user.into())
        })
        .await
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        within(self.uow.as_ref(), async { Ok(self.repository.count().await?) }).await
    }

    pub async fn create(&self, user_in: UserIn) -> Result<UserOut, ServiceError> {
        within(self.uow.as_ref(), async {
            let user = self.repository.create(user_in.into()).await?;
            self.uow.commit().await?;
            Ok(user.into())
        })
        .await
    }

    /// 在同一个已提交的作用域内批量创建用户
    pub async fn create_batch(&self, users: Vec<UserIn>) -> Result<Vec<UserOut>, ServiceError> {
        within(self.uow.as_ref(), async {
            let created = self
                .repository
                .create_many(users.into_iter().map(Into::into).collect())
                .await?;
            self.uow.commit().await?;
            Ok(created.into_iter().map(UserOut::from).collect())
        })
        .await
    }

    pub async fn update(&self, id: Uuid, update: UserUpdate) -> Result<UserOut, ServiceError> {
        within(self.uow.as_ref(), async {
            let user = self.repository.update(id, update.into()).await?;
            self.uow.commit().await?;
            Ok(user.into())
        })
        .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        within(self.uow.as_ref(), async {
            self.repository.delete(id).await?;
            self.uow.commit().await?;
            Ok(())
        })
        .await
    }
}
