// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::repository_error::RepositoryError;
use async_trait::async_trait;
use std::fmt::Display;
use std::future::Future;
use tracing::warn;

/// 作用域的退出方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeExit {
    /// 作用域内的操作正常结束
    Completed,
    /// 作用域内有错误向外传播
    Failed,
}

/// 工作单元特质
///
/// 单个存储会话上的事务边界。每个请求使用独立的实例，不跨请求共享。
///
/// 契约：
/// - `enter` 开始作用域（对事务型实现而言即开启事务）
/// - `exit` 结束作用域并释放会话；未提交的写入一律丢弃，
///   异常退出时必须先回滚
/// - 只有显式调用 `commit` 才会持久化
/// - 回滚失败不会被吞掉，而是作为错误返回
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 进入作用域
    async fn enter(&self) -> Result<(), RepositoryError>;

    /// 退出作用域
    ///
    /// # 参数
    ///
    /// * `outcome` - 作用域内的操作是否以错误结束
    async fn exit(&self, outcome: ScopeExit) -> Result<(), RepositoryError>;

    /// 提交当前事务
    async fn commit(&self) -> Result<(), RepositoryError>;

    /// 回滚当前事务
    async fn rollback(&self) -> Result<(), RepositoryError>;
}

/// 在工作单元作用域内执行 `work`
///
/// 先 `enter`，再等待 `work`，最后按其结果以 `Completed` 或 `Failed` 调用 `exit`。
/// `work` 需要持久化时必须在内部自行调用 `commit`。
///
/// 若 `exit` 本身失败（例如回滚失败），返回 `exit` 的错误，
/// 原始错误会先记录到日志中。
pub async fn within<U, T, E, F>(uow: &U, work: F) -> Result<T, E>
where
    U: UnitOfWork + ?Sized,
    F: Future<Output = Result<T, E>>,
    E: From<RepositoryError> + Display,
{
    uow.enter().await?;

    match work.await {
        Ok(value) => {
            uow.exit(ScopeExit::Completed).await?;
            Ok(value)
        }
        Err(err) => {
            warn!(error = %err, "Unit of work scope failed, rolling back");
            uow.exit(ScopeExit::Failed).await?;
            Err(err)
        }
    }
}
