// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::user_dto::{UserIn, UserOut, UserUpdate};
use crate::infrastructure::container::ServiceContainer;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::pagination::PaginationParams;
use axum::extract::Path;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub async fn list_users(
    Extension(container): Extension<Arc<ServiceContainer>>,
    PaginationParams(pagination): PaginationParams,
) -> Result<Json<Vec<UserOut>>, AppError> {
    let users = container.user_service().get_all(pagination).await?;
    Ok(Json(users))
}

pub async fn count_users(
    Extension(container): Extension<Arc<ServiceContainer>>,
) -> Result<Json<u64>, AppError> {
    Ok(Json(container.user_service().count().await?))
}

pub async fn random_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
) -> Result<Json<UserOut>, AppError> {
    Ok(Json(container.user_service().get_random().await?))
}

pub async fn get_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserOut>, AppError> {
    Ok(Json(container.user_service().get_by_id(id).await?))
}

pub async fn create_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Json(payload): Json<UserIn>,
) -> Result<(StatusCode, Json<UserOut>), AppError> {
    payload.validate()?;
    let user = container.user_service().create(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// 批量创建用户，整批在同一个事务中提交
pub async fn create_users_batch(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Json(payload): Json<Vec<UserIn>>,
) -> Result<(StatusCode, Json<Vec<UserOut>>), AppError> {
    for user in &payload {
        user.validate()?;
    }
    let users = container.user_service().create_batch(payload).await?;
    Ok((StatusCode::CREATED, Json(users)))
}

pub async fn update_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserOut>, AppError> {
    payload.validate()?;
    Ok(Json(container.user_service().update(id, payload).await?))
}

pub async fn delete_user(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    container.user_service().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
