use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
///
/// `InvalidCredentials` covers unknown email, wrong password, and inactive
/// accounts with one message, so callers cannot enumerate registered emails.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("no active session")]
    NoSession,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("password too weak")]
    WeakPassword,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid name")]
    InvalidName,
    #[error("missing data")]
    MissingData,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NoSession => "NO_SESSION",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidName => "INVALID_NAME",
            Self::MissingData => "MISSING_DATA",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials | Self::NoSession => StatusCode::UNAUTHORIZED,
            Self::DuplicateEmail => StatusCode::CONFLICT,
            Self::WeakPassword | Self::InvalidEmail | Self::InvalidName | Self::MissingData => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    async fn assert_error(
        error: AuthServiceError,
        expected_status: StatusCode,
        expected_kind: &str,
        expected_message: &str,
    ) {
        let resp = error.into_response();
        assert_eq!(resp.status(), expected_status);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], expected_kind);
        assert_eq!(json["message"], expected_message);
    }

    #[tokio::test]
    async fn should_return_invalid_credentials() {
        assert_error(
            AuthServiceError::InvalidCredentials,
            StatusCode::UNAUTHORIZED,
            "INVALID_CREDENTIALS",
            "invalid email or password",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_no_session() {
        assert_error(
            AuthServiceError::NoSession,
            StatusCode::UNAUTHORIZED,
            "NO_SESSION",
            "no active session",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_duplicate_email() {
        assert_error(
            AuthServiceError::DuplicateEmail,
            StatusCode::CONFLICT,
            "DUPLICATE_EMAIL",
            "email already registered",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_weak_password() {
        assert_error(
            AuthServiceError::WeakPassword,
            StatusCode::BAD_REQUEST,
            "WEAK_PASSWORD",
            "password too weak",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            AuthServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
