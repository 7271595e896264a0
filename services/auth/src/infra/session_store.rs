use std::path::PathBuf;

use anyhow::Context as _;
use deadpool_redis::Pool;
use deadpool_redis::redis::AsyncCommands;
use serde_json::{Map, Value};

use crate::domain::repository::SessionStore;
use crate::error::AuthServiceError;

// ── Redis store (primary) ────────────────────────────────────────────────────

/// Durable store backed by one Redis hash per namespace.
#[derive(Clone)]
pub struct RedisSessionStore {
    pub pool: Pool,
    pub namespace: String,
}

impl RedisSessionStore {
    fn hash_key(&self) -> String {
        format!("voyago:{}", self.namespace)
    }
}

impl SessionStore for RedisSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let value: Option<String> = conn
            .hget(self.hash_key(), key)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let (): () = conn
            .hset(self.hash_key(), key, value)
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), AuthServiceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| AuthServiceError::Internal(e.into()))?;
        let (): () = conn
            .del(self.hash_key())
            .await
            .map_err(|e: deadpool_redis::redis::RedisError| AuthServiceError::Internal(e.into()))?;
        Ok(())
    }
}

// ── File store (fallback) ────────────────────────────────────────────────────

/// Unencrypted fallback store: one JSON object per file.
#[derive(Clone)]
pub struct FileSessionStore {
    pub path: PathBuf,
}

impl FileSessionStore {
    async fn read_map(&self) -> Result<Map<String, Value>, AuthServiceError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes).context("parse store file")?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(AuthServiceError::Internal(
                anyhow::Error::new(e).context("read store file"),
            )),
        }
    }

    async fn write_map(&self, map: &Map<String, Value>) -> Result<(), AuthServiceError> {
        let bytes = serde_json::to_vec(map).context("serialize store file")?;
        tokio::fs::write(&self.path, bytes)
            .await
            .context("write store file")?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
        let map = self.read_map().await?;
        Ok(map.get(key).and_then(Value::as_str).map(ToOwned::to_owned))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AuthServiceError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_owned(), Value::String(value.to_owned()));
        self.write_map(&map).await
    }

    async fn clear(&self) -> Result<(), AuthServiceError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthServiceError::Internal(
                anyhow::Error::new(e).context("remove store file"),
            )),
        }
    }
}

// ── Fallback chain ───────────────────────────────────────────────────────────

/// Ranked store chain: the primary is tried first, the secondary absorbs its
/// failures. An error surfaces only when both backends fail.
#[derive(Clone)]
pub struct FallbackSessionStore<P, S> {
    pub primary: P,
    pub secondary: S,
}

impl<P: SessionStore, S: SessionStore> SessionStore for FallbackSessionStore<P, S> {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
        match self.primary.get(key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(error = %e, key, "primary store read failed, trying fallback");
                self.secondary.get(key).await
            }
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AuthServiceError> {
        match self.primary.set(key, value).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(error = %e, key, "primary store write failed, trying fallback");
                self.secondary.set(key, value).await
            }
        }
    }

    async fn clear(&self) -> Result<(), AuthServiceError> {
        // Clear both: earlier writes may have landed in either backend.
        let primary = self.primary.clear().await;
        let secondary = self.secondary.clear().await;
        match (primary, secondary) {
            (Err(e), Err(_)) => Err(e),
            (Err(e), Ok(())) | (Ok(()), Err(e)) => {
                tracing::warn!(error = %e, "one store failed to clear");
                Ok(())
            }
            (Ok(()), Ok(())) => Ok(()),
        }
    }
}
