// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::FieldChanges;
use crate::domain::models::pagination::Pagination;
use crate::domain::repositories::repository_error::RepositoryError;
use crate::infrastructure::mongo::documents::MongoDocument;
use crate::infrastructure::mongo::session::MongoSession;
use mongodb::bson::{self, doc, Bson, Document};
use mongodb::Collection;
use std::marker::PhantomData;
use uuid::Uuid;

/// 文档存储的通用仓库
///
/// 与 [`SeaOrmRepository`](super::sea_orm_repository::SeaOrmRepository) 提供相同的操作，
/// 每次调用都绑定到请求级会话上，从而参与工作单元开启的事务。
pub struct MongoRepository<D: MongoDocument> {
    session: MongoSession,
    _document: PhantomData<D>,
}

fn id_filter(id: Uuid) -> Document {
    doc! { "_id": bson::Uuid::from_bytes(id.into_bytes()) }
}

impl<D: MongoDocument> MongoRepository<D> {
    pub fn new(session: MongoSession) -> Self {
        Self {
            session,
            _document: PhantomData,
        }
    }

    fn collection(&self) -> Collection<D> {
        self.session.database().collection::<D>(D::COLLECTION)
    }

    /// 获取全部文档，按 `_id` 升序
    pub async fn get_all(&self, pagination: Option<Pagination>) -> Result<Vec<D>, RepositoryError> {
        let collection = self.collection();
        let mut session = self.session.lock().await;

        let mut find = collection.find(doc! {}).sort(doc! { "_id": 1 });
        if let Some(pagination) = pagination {
            find = find
                .skip(pagination.offset())
                .limit(i64::try_from(pagination.limit()).unwrap_or(i64::MAX));
        }

        let mut cursor = find.session(&mut *session).await?;
        let mut documents = Vec::new();
        while let Some(document) = cursor.next(&mut *session).await {
            documents.push(document?);
        }
        Ok(documents)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<D>, RepositoryError> {
        let collection = self.collection();
        let mut session = self.session.lock().await;
        Ok(collection
            .find_one(id_filter(id))
            .session(&mut *session)
            .await?)
    }

    pub async fn count(&self) -> Result<u64, RepositoryError> {
        let collection = self.collection();
        let mut session = self.session.lock().await;
        Ok(collection
            .count_documents(doc! {})
            .session(&mut *session)
            .await?)
    }

    /// 插入文档，返回插入的文档本身
    pub async fn create(&self, document: D) -> Result<D, RepositoryError> {
        let collection = self.collection();
        let mut session = self.session.lock().await;
        collection
            .insert_one(&document)
            .session(&mut *session)
            .await?;
        Ok(document)
    }

    pub async fn create_many(&self, documents: Vec<D>) -> Result<Vec<D>, RepositoryError> {
        if documents.is_empty() {
            return Ok(documents);
        }

        let collection = self.collection();
        let mut session = self.session.lock().await;
        collection
            .insert_many(&documents)
            .session(&mut *session)
            .await?;
        Ok(documents)
    }

    /// 按ID以 `$set` 更新指定字段，并返回更新后的文档
    ///
    /// `exclude_absent` 为 `false` 时，`None` 字段写为 `null`。
    /// 没有任何字段需要写入时不会发出更新，只做回读。
    pub async fn update_by_id(
        &self,
        id: Uuid,
        changes: FieldChanges<&'static str, Bson>,
        exclude_absent: bool,
    ) -> Result<D, RepositoryError> {
        let mut fields = Document::new();
        for (field, value) in changes {
            match value {
                Some(value) => {
                    fields.insert(field, value);
                }
                None if exclude_absent => {}
                None => {
                    fields.insert(field, Bson::Null);
                }
            }
        }

        let collection = self.collection();
        let mut session = self.session.lock().await;

        if !fields.is_empty() {
            let result = collection
                .update_one(id_filter(id), doc! { "$set": fields })
                .session(&mut *session)
                .await?;
            if result.matched_count == 0 {
                return Err(RepositoryError::not_found(D::ENTITY, id));
            }
        }

        collection
            .find_one(id_filter(id))
            .session(&mut *session)
            .await?
            .ok_or_else(|| RepositoryError::not_found_after_update(D::ENTITY, id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let collection = self.collection();
        let mut session = self.session.lock().await;
        let result = collection
            .delete_one(id_filter(id))
            .session(&mut *session)
            .await?;
        if result.deleted_count == 0 {
            return Err(RepositoryError::not_found(D::ENTITY, id));
        }
        Ok(())
    }
}
