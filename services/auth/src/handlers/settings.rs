use axum::{Json, extract::State, http::StatusCode};

use crate::domain::types::AppSettings;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::settings::{GetSettingsUseCase, UpdateSettingsUseCase};

// ── GET /settings ────────────────────────────────────────────────────────────

pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<AppSettings>, AuthServiceError> {
    let usecase = GetSettingsUseCase {
        store: state.settings_store.clone(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── PUT /settings ────────────────────────────────────────────────────────────

pub async fn update_settings(
    State(state): State<AppState>,
    Json(body): Json<AppSettings>,
) -> Result<StatusCode, AuthServiceError> {
    let usecase = UpdateSettingsUseCase {
        store: state.settings_store.clone(),
    };
    usecase.execute(body).await?;
    Ok(StatusCode::NO_CONTENT)
}
