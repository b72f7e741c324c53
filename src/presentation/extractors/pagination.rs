// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::pagination::{Pagination, DEFAULT_LIMIT, MAX_LIMIT};
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

/// 分页查询参数 `?limit=&offset=`
#[derive(Debug, Deserialize, Validate)]
pub struct PaginationQuery {
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = MAX_LIMIT))]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// 经过校验的分页参数
///
/// 解析或校验失败时直接返回 400，处理器不会被调用。
#[derive(Debug, Clone, Copy)]
pub struct PaginationParams(pub Pagination);

impl<S> FromRequestParts<S> for PaginationParams
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| bad_request(rejection.body_text()))?;

        query
            .validate()
            .map_err(|errors| bad_request(errors.to_string()))?;

        Ok(PaginationParams(Pagination::new(query.limit, query.offset)))
    }
}

fn bad_request(message: String) -> Response {
    let body = Json(json!({ "error": message }));
    (StatusCode::BAD_REQUEST, body).into_response()
}
