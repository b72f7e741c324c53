// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::FieldChanges;
use crate::domain::models::pagination::Pagination;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::infrastructure::database::session::SeaOrmSession;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, Iterable,
    PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect,
    Value,
};
use std::marker::PhantomData;
use uuid::Uuid;

/// 关系型存储的通用仓库
///
/// 以 SeaORM 实体为参数的 CRUD 原语，由各实体仓库组合使用。
/// 所有操作都在会话的当前事务中执行。
pub struct SeaOrmRepository<E: EntityTrait> {
    session: SeaOrmSession,
    /// 错误信息中使用的实体名称
    entity_name: &'static str,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    /// 创建通用仓库
    ///
    /// # 参数
    ///
    /// * `session` - 请求级会话
    /// * `entity_name` - 实体名称，用于错误信息
    pub fn new(session: SeaOrmSession, entity_name: &'static str) -> Self {
        Self {
            session,
            entity_name,
            _entity: PhantomData,
        }
    }

    pub fn session(&self) -> &SeaOrmSession {
        &self.session
    }

    /// 获取全部记录，给定分页参数时只返回对应窗口
    ///
    /// 按主键升序排列，保证分页窗口稳定。
    pub async fn get_all(
        &self,
        pagination: Option<Pagination>,
    ) -> Result<Vec<E::Model>, RepositoryError> {
        let txn = self.session.acquire().await?;

        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        if let Some(pagination) = pagination {
            query = query
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        Ok(query.all(txn.connection()?).await?)
    }

    /// 根据ID查找记录，不存在时返回 `Ok(None)`
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<E::Model>, RepositoryError> {
        let txn = self.session.acquire().await?;
        Ok(E::find_by_id(id).one(txn.connection()?).await?)
    }

    /// 记录总数（忽略分页）
    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let txn = self.session.acquire().await?;
        Ok(E::find().count(txn.connection()?).await?)
    }

    /// 插入一条记录，返回带有存储生成字段的完整记录
    pub async fn create<A>(&self, values: A) -> Result<E::Model, RepositoryError>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let txn = self.session.acquire().await?;
        Ok(values.insert(txn.connection()?).await?)
    }

    /// 批量插入记录
    ///
    /// 空批次直接返回空列表，不访问数据库。
    pub async fn create_many<A>(&self, values: Vec<A>) -> Result<Vec<E::Model>, RepositoryError>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.session.acquire().await?;
        let conn = txn.connection()?;

        let mut created = Vec::with_capacity(values.len());
        for value in values {
            created.push(value.insert(conn).await?);
        }
        Ok(created)
    }

    /// 按ID更新指定字段，并返回更新后的记录
    ///
    /// # 参数
    ///
    /// * `id` - 记录ID
    /// * `changes` - 待写入的字段，`None` 表示“不修改”
    /// * `exclude_absent` - 为 `true` 时丢弃 `None` 字段；否则 `None` 写为 NULL
    ///
    /// # 返回值
    ///
    /// * `Ok(Model)` - 回读到的最新记录
    /// * `Err(RepositoryError::NotFound)` - 目标不存在，或写入后回读时已消失
    pub async fn update_by_id(
        &self,
        id: Uuid,
        changes: FieldChanges<E::Column, Value>,
        exclude_absent: bool,
    ) -> Result<E::Model, RepositoryError> {
        let txn = self.session.acquire().await?;
        let conn = txn.connection()?;

        let mut update = E::update_many().filter(self.primary_key_column()?.eq(id));
        let mut has_changes = false;
        for (column, value) in changes {
            match value {
                Some(value) => {
                    update = update.col_expr(column, Expr::value(value));
                    has_changes = true;
                }
                None if exclude_absent => {}
                None => {
                    update = update.col_expr(column, Expr::cust("NULL"));
                    has_changes = true;
                }
            }
        }

        if has_changes {
            let result = update.exec(conn).await?;
            if result.rows_affected == 0 {
                return Err(RepositoryError::not_found(self.entity_name, id));
            }
        }

        E::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| RepositoryError::not_found_after_update(self.entity_name, id))
    }

    /// 按ID删除记录，没有删除任何记录时返回 `NotFound`
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let txn = self.session.acquire().await?;
        let result = E::delete_by_id(id).exec(txn.connection()?).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(self.entity_name, id));
        }
        Ok(())
    }

    fn primary_key_column(&self) -> Result<E::Column, RepositoryError> {
        E::PrimaryKey::iter()
            .next()
            .map(|key| key.into_column())
            .ok_or_else(|| {
                RepositoryError::Conversion(format!("{} has no primary key", self.entity_name))
            })
    }
}
