// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use std::fmt::Display;
use thiserror::Error;

/// 仓库错误类型
///
/// 存储层的瞬时错误原样向上传播，本层不做任何重试。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 关系型数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 文档存储错误
    #[error("Document store error: {0}")]
    Document(#[from] mongodb::error::Error),
    /// 记录未找到
    #[error("{0}")]
    NotFound(String),
    /// 存储记录无法转换为领域记录
    #[error("Record conversion failed: {0}")]
    Conversion(String),
}

impl RepositoryError {
    /// 按 id 查找、更新或删除时目标不存在
    pub fn not_found(entity: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{} with id={} not found", entity, id))
    }

    /// 写入成功后回读时记录已消失
    pub fn not_found_after_update(entity: &str, id: impl Display) -> Self {
        Self::NotFound(format!("{} with id={} not found after update", entity, id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
