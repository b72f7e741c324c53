// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_LIMIT: u64 = 10;
/// 每页条数上限
pub const MAX_LIMIT: u64 = 100;

/// 分页参数
///
/// 不可变的 (limit, offset) 值，按值传递给列表查询。
/// 边界校验由调用方（HTTP 层）负责，这里不做截断。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    limit: u64,
    offset: u64,
}

impl Pagination {
    /// 创建分页参数
    pub const fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// 本页最多返回的记录数
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// 跳过的记录数
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// 下一页的分页参数
    pub const fn next_page(&self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, 0)
    }
}
