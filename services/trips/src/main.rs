use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use voyago_core::config::Config;
use voyago_core::tracing::init_tracing;
use voyago_trips::config::TripsConfig;
use voyago_trips::infra::cache::TripListCache;
use voyago_trips::router::build_router;
use voyago_trips::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = TripsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        trip_cache: Arc::new(TripListCache::default()),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.trips_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("trips service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
