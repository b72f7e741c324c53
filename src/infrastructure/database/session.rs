// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// 关系型存储的请求级会话
///
/// 工作单元和仓库持有同一个会话的克隆，因而操作同一个事务。
/// 会话只属于一个请求，不能跨请求复用。
///
/// 与 SQLAlchemy 的会话类似，仓库在没有打开的事务时会自动开启一个；
/// 未提交的事务在会话释放（或被丢弃）时回滚。
#[derive(Clone)]
pub struct SeaOrmSession {
    db: Arc<DatabaseConnection>,
    transaction: Arc<Mutex<Option<DatabaseTransaction>>>,
}

/// 持有会话锁的事务句柄
///
/// 在句柄存活期间，同一会话上的其他操作会等待，
/// 保证作用域内的操作严格串行。
pub struct ActiveTransaction<'a> {
    slot: MutexGuard<'a, Option<DatabaseTransaction>>,
}

impl ActiveTransaction<'_> {
    /// 获取可执行查询的事务连接
    pub fn connection(&self) -> Result<&DatabaseTransaction, DbErr> {
        self.slot
            .as_ref()
            .ok_or_else(|| DbErr::Custom("relational session has no open transaction".to_string()))
    }
}

impl SeaOrmSession {
    /// 基于共享连接池创建新的会话
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            transaction: Arc::new(Mutex::new(None)),
        }
    }

    /// 开启事务；已有打开的事务时保持不变
    pub async fn begin(&self) -> Result<(), DbErr> {
        let mut slot = self.transaction.lock().await;
        if slot.is_none() {
            *slot = Some(self.db.begin().await?);
        }
        Ok(())
    }

    /// 获取当前事务，没有打开的事务时自动开启
    pub async fn acquire(&self) -> Result<ActiveTransaction<'_>, DbErr> {
        let mut slot = self.transaction.lock().await;
        if slot.is_none() {
            *slot = Some(self.db.begin().await?);
        }
        Ok(ActiveTransaction { slot })
    }

    /// 提交当前事务
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 事务已提交
    /// * `Ok(false)` - 没有打开的事务，无需提交
    pub async fn commit(&self) -> Result<bool, DbErr> {
        let pending = self.transaction.lock().await.take();
        match pending {
            Some(txn) => {
                txn.commit().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 回滚当前事务
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 事务已回滚
    /// * `Ok(false)` - 没有打开的事务
    pub async fn rollback(&self) -> Result<bool, DbErr> {
        let pending = self.transaction.lock().await.take();
        match pending {
            Some(txn) => {
                txn.rollback().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 是否存在打开的事务
    #[doc(hidden)]
    pub async fn in_transaction(&self) -> bool {
        self.transaction.lock().await.is_some()
    }
}
