#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::AuthUser;
use crate::error::AuthServiceError;

/// Repository for account records.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AuthUser>, AuthServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthServiceError>;
    async fn create(&self, user: &AuthUser) -> Result<(), AuthServiceError>;
}

/// Namespaced durable key/value store used for session and settings state.
///
/// Implementations are ranked into a fallback chain; see
/// `infra::session_store::FallbackSessionStore`.
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), AuthServiceError>;
    /// Remove every key in this store's namespace.
    async fn clear(&self) -> Result<(), AuthServiceError>;
}
