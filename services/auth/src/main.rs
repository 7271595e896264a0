use std::sync::Arc;

use sea_orm::Database;
use tokio::sync::watch;
use tracing::info;

use voyago_auth::config::AuthConfig;
use voyago_auth::domain::types::ConnectionState;
use voyago_auth::infra::session_store::{
    FallbackSessionStore, FileSessionStore, RedisSessionStore,
};
use voyago_auth::router::build_router;
use voyago_auth::state::AppState;
use voyago_auth::usecase::session::SessionCache;
use voyago_core::config::Config;
use voyago_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let session_store = FallbackSessionStore {
        primary: RedisSessionStore {
            pool: redis.clone(),
            namespace: "session".to_owned(),
        },
        secondary: FileSessionStore {
            path: config.session_file.clone().into(),
        },
    };
    let settings_store = FallbackSessionStore {
        primary: RedisSessionStore {
            pool: redis,
            namespace: "settings".to_owned(),
        },
        secondary: FileSessionStore {
            path: config.settings_file.clone().into(),
        },
    };

    let (connection_tx, _) = watch::channel(ConnectionState::Disconnected);

    let state = AppState {
        db,
        session_store,
        settings_store,
        session_cache: Arc::new(SessionCache::default()),
        connection_tx,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
