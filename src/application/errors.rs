// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::repository_error::RepositoryError;
use thiserror::Error;

/// 服务层错误类型
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 目标实体不存在
    #[error("{0}")]
    NotFound(String),
    /// 输入被领域规则拒绝，未访问存储
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(message) => Self::NotFound(message),
            other => Self::Repository(other),
        }
    }
}
