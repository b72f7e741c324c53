// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::unit_of_work::{ScopeExit, UnitOfWork};
use crate::infrastructure::mongo::session::MongoSession;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

const STORE: &str = "document";

/// 文档存储的事务型工作单元
///
/// 需要副本集部署；单节点上开启事务会失败。
pub struct MongoUnitOfWork {
    session: MongoSession,
    transaction_open: AtomicBool,
}

impl MongoUnitOfWork {
    pub fn new(session: MongoSession) -> Self {
        Self {
            session,
            transaction_open: AtomicBool::new(false),
        }
    }

    async fn abort_open_transaction(&self) -> Result<bool, RepositoryError> {
        if !self.transaction_open.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }
        let mut session = self.session.lock().await;
        session.abort_transaction().await?;
        Ok(true)
    }
}

#[async_trait]
impl UnitOfWork for MongoUnitOfWork {
    async fn enter(&self) -> Result<(), RepositoryError> {
        let mut session = self.session.lock().await;
        session.start_transaction().await?;
        self.transaction_open.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn exit(&self, outcome: ScopeExit) -> Result<(), RepositoryError> {
        let aborted = self.abort_open_transaction().await?;
        match outcome {
            ScopeExit::Failed if aborted => {
                warn!(store = STORE, "Aborted transaction after failed scope");
                metrics::counter!("unit_of_work_rollbacks_total", "store" => STORE).increment(1);
            }
            ScopeExit::Completed if aborted => {
                debug!(store = STORE, "Discarded uncommitted transaction on scope exit");
            }
            _ => {}
        }
        Ok(())
    }

    async fn commit(&self) -> Result<(), RepositoryError> {
        // 提交失败后事务状态未知，不再尝试中止，交由会话结束时清理
        if !self.transaction_open.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        let mut session = self.session.lock().await;
        session.commit_transaction().await?;
        debug!(store = STORE, "Transaction committed");
        metrics::counter!("unit_of_work_commits_total", "store" => STORE).increment(1);
        Ok(())
    }

    async fn rollback(&self) -> Result<(), RepositoryError> {
        if self.abort_open_transaction().await? {
            metrics::counter!("unit_of_work_rollbacks_total", "store" => STORE).increment(1);
        }
        Ok(())
    }
}

/// 文档存储的空工作单元
///
/// 用于不支持事务的单节点部署：所有操作都是空操作，
/// 仓库的每次写入立即生效，多步写入不具备原子性。
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopUnitOfWork;

#[async_trait]
impl UnitOfWork for NoopUnitOfWork {
    async fn enter(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn exit(&self, _outcome: ScopeExit) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn commit(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn rollback(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
