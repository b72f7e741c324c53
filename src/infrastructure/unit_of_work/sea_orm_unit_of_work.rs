// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::repository_error::RepositoryError;
use crate::domain::repositories::unit_of_work::{ScopeExit, UnitOfWork};
use crate::infrastructure::database::session::SeaOrmSession;
use async_trait::async_trait;
use tracing::{debug, warn};

const STORE: &str = "relational";

/// 关系型存储的事务型工作单元
///
/// 与仓库共享同一个 [`SeaOrmSession`]。
/// 退出作用域时未提交的事务一律回滚。
pub struct SeaOrmUnitOfWork {
    session: SeaOrmSession,
}

impl SeaOrmUnitOfWork {
    pub fn new(session: SeaOrmSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl UnitOfWork for SeaOrmUnitOfWork {
    async fn enter(&self) -> Result<(), RepositoryError> {
        self.session.begin().await?;
        Ok(())
    }

    async fn exit(&self, outcome: ScopeExit) -> Result<(), RepositoryError> {
        let rolled_back = self.session.rollback().await?;
        match outcome {
            ScopeExit::Failed if rolled_back => {
                warn!(store = STORE, "Rolled back transaction after failed scope");
                metrics::counter!("unit_of_work_rollbacks_total", "store" => STORE).increment(1);
            }
            ScopeExit::Completed if rolled_back => {
                debug!(store = STORE, "Discarded uncommitted transaction on scope exit");
            }
            _ => {}
        }
        Ok(())
    }

    async fn commit(&self) -> Result<(), RepositoryError> {
        if self.session.commit().await? {
            debug!(store = STORE, "Transaction committed");
            metrics::counter!("unit_of_work_commits_total", "store" => STORE).increment(1);
        }
        Ok(())
    }

    async fn rollback(&self) -> Result<(), RepositoryError> {
        if self.session.rollback().await? {
            metrics::counter!("unit_of_work_rollbacks_total", "store" => STORE).increment(1);
        }
        Ok(())
    }
}
