// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::container::ServiceContainer;
use crate::presentation::handlers::{player_handler, user_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 构建应用路由
///
/// # 参数
///
/// * `container` - 服务容器，处理器从中为每个请求构造服务
pub fn routes(container: Arc<ServiceContainer>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let user_routes = Router::new()
        .route(
            "/v1/users",
            get(user_handler::list_users).post(user_handler::create_user),
        )
        .route("/v1/users/batch", post(user_handler::create_users_batch))
        .route("/v1/users/count", get(user_handler::count_users))
        .route("/v1/users/random", get(user_handler::random_user))
        .route(
            "/v1/users/{id}",
            get(user_handler::get_user)
                .put(user_handler::update_user)
                .delete(user_handler::delete_user),
        );

    let player_routes = Router::new()
        .route(
            "/v1/players",
            get(player_handler::list_players).post(player_handler::create_player),
        )
        .route("/v1/players/count", get(player_handler::count_players))
        .route(
            "/v1/players/{id}",
            get(player_handler::get_player)
                .put(player_handler::update_player)
                .delete(player_handler::delete_player),
        );

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(player_routes)
        .layer(Extension(container))
        .layer(TraceLayer::new_for_http())
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
