use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::watch;

use crate::domain::types::ConnectionState;
use crate::infra::db::DbUserRepository;
use crate::infra::session_store::{FallbackSessionStore, FileSessionStore, RedisSessionStore};
use crate::usecase::session::SessionCache;

/// Redis-first store with a plain-file fallback.
pub type DurableStore = FallbackSessionStore<RedisSessionStore, FileSessionStore>;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub session_store: DurableStore,
    pub settings_store: DurableStore,
    pub session_cache: Arc<SessionCache>,
    pub connection_tx: watch::Sender<ConnectionState>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}
