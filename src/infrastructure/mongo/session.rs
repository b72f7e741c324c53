// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use mongodb::{Client, ClientSession, Database};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// 文档存储的请求级会话
///
/// 工作单元和仓库共享同一个 `ClientSession`，
/// 仓库的每次操作都显式绑定到该会话上。
/// 会话在最后一个克隆被丢弃时结束，服务端会中止其上未提交的事务。
#[derive(Clone)]
pub struct MongoSession {
    database: Database,
    session: Arc<Mutex<ClientSession>>,
}

impl MongoSession {
    /// 在给定客户端上开启新会话
    pub async fn start(client: &Client, database: Database) -> Result<Self, mongodb::error::Error> {
        let session = client.start_session().await?;
        Ok(Self {
            database,
            session: Arc::new(Mutex::new(session)),
        })
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// 独占底层会话
    pub async fn lock(&self) -> MutexGuard<'_, ClientSession> {
        self.session.lock().await
    }
}
