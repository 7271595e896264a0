use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::authenticate::AuthenticateUseCase;
use crate::usecase::register::{RegisterInput, RegisterUseCase};
use crate::usecase::session::{CurrentUserUseCase, LogoutUseCase};

#[derive(Serialize)]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub display_name: String,
}

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub surname: String,
    pub given_name: String,
    pub email: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<StatusCode, AuthServiceError> {
    let usecase = RegisterUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(RegisterInput {
            surname: body.surname,
            given_name: body.given_name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let usecase = AuthenticateUseCase {
        users: state.user_repo(),
        store: state.session_store.clone(),
        cache: state.session_cache.clone(),
        connection: state.connection_tx.clone(),
    };
    let session = usecase.execute(&body.email, &body.password).await?;
    Ok(Json(SessionResponse {
        user_id: session.user_id,
        display_name: session.display_name,
    }))
}

// ── POST /auth/logout ────────────────────────────────────────────────────────

pub async fn logout(State(state): State<AppState>) -> Result<StatusCode, AuthServiceError> {
    let usecase = LogoutUseCase {
        store: state.session_store.clone(),
        cache: state.session_cache.clone(),
        connection: state.connection_tx.clone(),
    };
    usecase.execute().await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /auth/session ────────────────────────────────────────────────────────

pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let usecase = CurrentUserUseCase {
        store: state.session_store.clone(),
        cache: state.session_cache.clone(),
    };
    let session = usecase.execute().await?.ok_or(AuthServiceError::NoSession)?;
    Ok(Json(SessionResponse {
        user_id: session.user_id,
        display_name: session.display_name,
    }))
}
