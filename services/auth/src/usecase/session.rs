use std::sync::Arc;

use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use crate::domain::repository::SessionStore;
use crate::domain::types::{
    ConnectionState, SESSION_USER_ID_KEY, SESSION_USER_NAME_KEY, Session,
};
use crate::error::AuthServiceError;

/// Process-lifetime cache of the current session. Filled by the first
/// successful durable read (or by login), cleared on logout.
#[derive(Default)]
pub struct SessionCache {
    slot: RwLock<Option<Session>>,
}

impl SessionCache {
    pub async fn get(&self) -> Option<Session> {
        self.slot.read().await.clone()
    }

    pub async fn put(&self, session: Session) {
        *self.slot.write().await = Some(session);
    }

    pub async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

// ── CurrentUser ──────────────────────────────────────────────────────────────

pub struct CurrentUserUseCase<S: SessionStore> {
    pub store: S,
    pub cache: Arc<SessionCache>,
}

impl<S: SessionStore> CurrentUserUseCase<S> {
    pub async fn execute(&self) -> Result<Option<Session>, AuthServiceError> {
        if let Some(session) = self.cache.get().await {
            return Ok(Some(session));
        }
        let Some(raw_id) = self.store.get(SESSION_USER_ID_KEY).await? else {
            return Ok(None);
        };
        let Some(display_name) = self.store.get(SESSION_USER_NAME_KEY).await? else {
            return Ok(None);
        };
        // A corrupt id means there is no usable session to restore.
        let Ok(user_id) = raw_id.parse::<Uuid>() else {
            return Ok(None);
        };
        let session = Session {
            user_id,
            display_name,
        };
        self.cache.put(session.clone()).await;
        Ok(Some(session))
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

pub struct LogoutUseCase<S: SessionStore> {
    pub store: S,
    pub cache: Arc<SessionCache>,
    pub connection: watch::Sender<ConnectionState>,
}

impl<S: SessionStore> LogoutUseCase<S> {
    pub async fn execute(&self) -> Result<(), AuthServiceError> {
        self.store.clear().await?;
        self.cache.clear().await;
        self.connection.send_replace(ConnectionState::Disconnected);
        Ok(())
    }
}
