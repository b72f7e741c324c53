// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::player_dto::{PlayerIn, PlayerOut, PlayerUpdate};
use crate::infrastructure::container::ServiceContainer;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::pagination::PaginationParams;
use axum::extract::Path;
use axum::{http::StatusCode, Extension, Json};
use std::sync::Arc;
use uuid::Uuid;

pub async fn list_players(
    Extension(container): Extension<Arc<ServiceContainer>>,
    PaginationParams(pagination): PaginationParams,
) -> Result<Json<Vec<PlayerOut>>, AppError> {
    let service = container.player_service().await?;
    Ok(Json(service.get_all(pagination).await?))
}

pub async fn count_players(
    Extension(container): Extension<Arc<ServiceContainer>>,
) -> Result<Json<u64>, AppError> {
    let service = container.player_service().await?;
    Ok(Json(service.count().await?))
}

pub async fn get_player(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlayerOut>, AppError> {
    let service = container.player_service().await?;
    Ok(Json(service.get_by_id(id).await?))
}

pub async fn create_player(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Json(payload): Json<PlayerIn>,
) -> Result<(StatusCode, Json<PlayerOut>), AppError> {
    let service = container.player_service().await?;
    let player = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn update_player(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PlayerUpdate>,
) -> Result<Json<PlayerOut>, AppError> {
    let service = container.player_service().await?;
    Ok(Json(service.update(id, payload).await?))
}

pub async fn delete_player(
    Extension(container): Extension<Arc<ServiceContainer>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let service = container.player_service().await?;
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
