use anyhow::Context as _;

use crate::domain::repository::SessionStore;
use crate::domain::types::{AppSettings, SETTINGS_KEY};
use crate::error::AuthServiceError;

// ── GetSettings ──────────────────────────────────────────────────────────────

pub struct GetSettingsUseCase<S: SessionStore> {
    pub store: S,
}

impl<S: SessionStore> GetSettingsUseCase<S> {
    /// An absent or unreadable blob yields the defaults.
    pub async fn execute(&self) -> Result<AppSettings, AuthServiceError> {
        match self.store.get(SETTINGS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(AppSettings::default()),
        }
    }
}

// ── UpdateSettings ───────────────────────────────────────────────────────────

pub struct UpdateSettingsUseCase<S: SessionStore> {
    pub store: S,
}

impl<S: SessionStore> UpdateSettingsUseCase<S> {
    pub async fn execute(&self, settings: AppSettings) -> Result<(), AuthServiceError> {
        let raw = serde_json::to_string(&settings).context("serialize settings")?;
        self.store.set(SETTINGS_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeStore {
        map: Mutex<HashMap<String, String>>,
    }

    impl SessionStore for FakeStore {
        async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }
        async fn set(&self, key: &str, value: &str) -> Result<(), AuthServiceError> {
            self.map
                .lock()
                .unwrap()
                .insert(key.to_owned(), value.to_owned());
            Ok(())
        }
        async fn clear(&self) -> Result<(), AuthServiceError> {
            self.map.lock().unwrap().clear();
            Ok(())
        }
    }

    #[tokio::test]
    async fn should_return_defaults_when_blob_absent() {
        let uc = GetSettingsUseCase {
            store: FakeStore::default(),
        };
        assert_eq!(uc.execute().await.unwrap(), AppSettings::default());
    }

    #[tokio::test]
    async fn should_return_defaults_for_corrupt_blob() {
        let store = FakeStore::default();
        store.set(SETTINGS_KEY, "{not json").await.unwrap();
        let uc = GetSettingsUseCase { store };
        assert_eq!(uc.execute().await.unwrap(), AppSettings::default());
    }

    #[tokio::test]
    async fn should_roundtrip_updated_settings() {
        let store = FakeStore::default();
        let settings = AppSettings {
            language: "it".into(),
            theme: "dark".into(),
            notifications_enabled: false,
            location_enabled: true,
            currency: "USD".into(),
        };

        let update = UpdateSettingsUseCase { store };
        update.execute(settings.clone()).await.unwrap();

        let get = GetSettingsUseCase {
            store: update.store,
        };
        assert_eq!(get.execute().await.unwrap(), settings);
    }
}
