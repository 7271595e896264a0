use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Durable session key for the logged-in user's id.
pub const SESSION_USER_ID_KEY: &str = "current_user_id";
/// Durable session key for the logged-in user's display name.
pub const SESSION_USER_NAME_KEY: &str = "current_user_name";
/// Key the serialized settings blob is stored under.
pub const SETTINGS_KEY: &str = "app_settings";

/// Account record owned by the auth service.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub surname: String,
    pub given_name: String,
    pub email: String,
    pub password_digest: String,
    pub reward_points: i32,
    pub is_active: bool,
    pub registered_at: DateTime<Utc>,
}

impl AuthUser {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }
}

/// The "current user", held in memory and mirrored to durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub display_name: String,
}

/// Login state broadcast to subscribers on login/logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected(Uuid),
}

/// User preferences persisted as one JSON blob under [`SETTINGS_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub language: String,
    pub theme: String,
    pub notifications_enabled: bool,
    pub location_enabled: bool,
    pub currency: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: "en".into(),
            theme: "light".into(),
            notifications_enabled: true,
            location_enabled: false,
            currency: "EUR".into(),
        }
    }
}

/// Minimal email shape check: non-empty local part, domain containing a dot
/// with no empty labels, no whitespace.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Names are 1–50 characters after trimming.
pub fn validate_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= 50
}

/// Password policy: at least 8 characters with a lowercase letter, an
/// uppercase letter, and a digit.
pub fn password_meets_policy(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_valid_email() {
        assert!(validate_email("marco@example.com"));
        assert!(validate_email("a.b@mail.provider.co"));
    }

    #[test]
    fn should_reject_malformed_email() {
        assert!(!validate_email(""));
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("marco@"));
        assert!(!validate_email("marco@nodot"));
        assert!(!validate_email("marco@bad..dot"));
        assert!(!validate_email("marco@.com"));
        assert!(!validate_email("marco@a@b.com"));
        assert!(!validate_email("mar co@example.com"));
    }

    #[test]
    fn should_accept_reasonable_names() {
        assert!(validate_name("Rossi"));
        assert!(validate_name("  Anna "));
    }

    #[test]
    fn should_reject_blank_or_oversized_names() {
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name(&"x".repeat(51)));
    }

    #[test]
    fn should_enforce_password_policy() {
        assert!(password_meets_policy("Str0ngpass"));
        assert!(!password_meets_policy("Sh0rt"));
        assert!(!password_meets_policy("alllower1"));
        assert!(!password_meets_policy("ALLUPPER1"));
        assert!(!password_meets_policy("NoDigitsHere"));
    }

    #[test]
    fn should_build_display_name_from_given_name_and_surname() {
        let user = AuthUser {
            id: Uuid::now_v7(),
            surname: "Rossi".into(),
            given_name: "Marco".into(),
            email: "marco@example.com".into(),
            password_digest: "digest".into(),
            reward_points: 0,
            is_active: true,
            registered_at: Utc::now(),
        };
        assert_eq!(user.display_name(), "Marco Rossi");
    }

    #[test]
    fn should_default_settings_to_sensible_values() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, "en");
        assert!(settings.notifications_enabled);
        assert!(!settings.location_enabled);
    }

    #[test]
    fn should_roundtrip_settings_through_json() {
        let settings = AppSettings {
            language: "it".into(),
            theme: "dark".into(),
            notifications_enabled: false,
            location_enabled: true,
            currency: "USD".into(),
        };
        let raw = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, settings);
    }
}
