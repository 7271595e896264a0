use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voyago_core::serde::to_rfc3339_ms;

use crate::domain::types::Activity;
use crate::error::TripsServiceError;
use crate::state::AppState;
use crate::usecase::activity::{
    ActivityInput, CreateActivityUseCase, DeleteActivityUseCase, ListActivitiesUseCase,
};

#[derive(Serialize)]
pub struct ActivityResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            description: activity.description,
            location: activity.location,
            created_at: activity.created_at,
        }
    }
}

// ── GET /activities ──────────────────────────────────────────────────────────

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, TripsServiceError> {
    let usecase = ListActivitiesUseCase {
        repo: state.activity_repo(),
    };
    let activities = usecase.execute().await?;
    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

// ── POST /activities ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateActivityRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(body): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), TripsServiceError> {
    let usecase = CreateActivityUseCase {
        repo: state.activity_repo(),
    };
    let activity = usecase
        .execute(ActivityInput {
            name: body.name,
            description: body.description,
            location: body.location,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(activity.into())))
}

// ── DELETE /activities/{id} ──────────────────────────────────────────────────

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = DeleteActivityUseCase {
        repo: state.activity_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
