use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Trips service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum TripsServiceError {
    #[error("trip not found")]
    TripNotFound,
    #[error("name is required")]
    MissingName,
    #[error("end date must not precede start date")]
    InvalidDateRange,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TripsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TripNotFound => "TRIP_NOT_FOUND",
            Self::MissingName => "MISSING_NAME",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for TripsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::TripNotFound => StatusCode::NOT_FOUND,
            Self::MissingName | Self::InvalidDateRange => StatusCode::BAD_REQUEST,
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
        error: TripsServiceError,
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
    async fn should_return_trip_not_found() {
        assert_error(
            TripsServiceError::TripNotFound,
            StatusCode::NOT_FOUND,
            "TRIP_NOT_FOUND",
            "trip not found",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_missing_name() {
        assert_error(
            TripsServiceError::MissingName,
            StatusCode::BAD_REQUEST,
            "MISSING_NAME",
            "name is required",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_invalid_date_range() {
        assert_error(
            TripsServiceError::InvalidDateRange,
            StatusCode::BAD_REQUEST,
            "INVALID_DATE_RANGE",
            "end date must not precede start date",
        )
        .await;
    }

    #[tokio::test]
    async fn should_return_internal() {
        assert_error(
            TripsServiceError::Internal(anyhow::anyhow!("db error")),
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL",
            "internal error",
        )
        .await;
    }
}
