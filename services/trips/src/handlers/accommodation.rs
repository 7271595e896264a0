use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voyago_core::serde::to_rfc3339_ms;

use crate::domain::types::Accommodation;
use crate::error::TripsServiceError;
use crate::state::AppState;
use crate::usecase::accommodation::{
    AccommodationInput, CreateAccommodationUseCase, DeleteAccommodationUseCase,
    ListAccommodationsUseCase,
};

#[derive(Serialize)]
pub struct AccommodationResponse {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub cost: f64,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub address: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Accommodation> for AccommodationResponse {
    fn from(accommodation: Accommodation) -> Self {
        Self {
            id: accommodation.id,
            name: accommodation.name,
            kind: accommodation.kind,
            cost: accommodation.cost,
            check_in: accommodation.check_in,
            check_out: accommodation.check_out,
            address: accommodation.address,
            created_at: accommodation.created_at,
        }
    }
}

// ── GET /accommodations ──────────────────────────────────────────────────────

pub async fn list_accommodations(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccommodationResponse>>, TripsServiceError> {
    let usecase = ListAccommodationsUseCase {
        repo: state.accommodation_repo(),
    };
    let accommodations = usecase.execute().await?;
    Ok(Json(accommodations.into_iter().map(Into::into).collect()))
}

// ── POST /accommodations ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAccommodationRequest {
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub check_in: Option<NaiveDate>,
    #[serde(default)]
    pub check_out: Option<NaiveDate>,
    #[serde(default)]
    pub address: String,
}

pub async fn create_accommodation(
    State(state): State<AppState>,
    Json(body): Json<CreateAccommodationRequest>,
) -> Result<(StatusCode, Json<AccommodationResponse>), TripsServiceError> {
    let usecase = CreateAccommodationUseCase {
        repo: state.accommodation_repo(),
    };
    let accommodation = usecase
        .execute(AccommodationInput {
            name: body.name,
            kind: body.kind,
            cost: body.cost,
            check_in: body.check_in,
            check_out: body.check_out,
            address: body.address,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(accommodation.into())))
}

// ── DELETE /accommodations/{id} ──────────────────────────────────────────────

pub async fn delete_accommodation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = DeleteAccommodationUseCase {
        repo: state.accommodation_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
