// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use duostore::config::settings::Settings;
use duostore::domain::repositories::key_value_cache::KeyValueCache;
use duostore::infrastructure::cache::redis_client::RedisClient;
use duostore::infrastructure::container::ServiceContainer;
use duostore::infrastructure::database::connection;
use duostore::infrastructure::metrics::init_metrics;
use duostore::infrastructure::mongo;
use duostore::presentation::routes;
use duostore::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();
    info!("Starting duostore...");

    let settings = Settings::new()?;
    info!("Configuration loaded");

    init_metrics(&settings.metrics);

    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    let mongo_client = mongo::connection::create_client(&settings.mongo).await?;
    let mongo_database = mongo::connection::database(&mongo_client, &settings.mongo);
    mongo::migrations::rename_legacy_player_fields(&mongo_database).await?;
    info!("MongoDB client initialized");

    let cache: Arc<dyn KeyValueCache> = Arc::new(RedisClient::new(&settings.redis.url)?);
    info!("Redis client initialized");

    let container = Arc::new(ServiceContainer::new(
        db,
        mongo_client,
        mongo_database,
        cache,
        settings.mongo.use_transactions,
    ));

    let app = routes::routes(container);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
