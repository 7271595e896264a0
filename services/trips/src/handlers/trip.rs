use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use voyago_auth_types::identity::IdentityHeaders;
use voyago_core::serde::to_rfc3339_ms;

use crate::domain::types::{LinkOutcome, Trip, TripDetails};
use crate::error::TripsServiceError;
use crate::handlers::accommodation::AccommodationResponse;
use crate::handlers::activity::ActivityResponse;
use crate::state::AppState;
use crate::usecase::link::{
    AccommodationDraft, ActivityDraft, AddAccommodationLinkUseCase, AddActivityLinkUseCase,
    RemoveAccommodationLinkUseCase, RemoveActivityLinkUseCase,
};
use crate::usecase::trip::{
    CreateTripUseCase, DeleteTripUseCase, GetTripDetailsUseCase, GetTripUseCase, ListTripsUseCase,
    TripDraft, UpdateTripUseCase,
};

#[derive(Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_completed: bool,
    pub is_archived: bool,
    pub user_id: Uuid,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id,
            name: trip.name,
            description: trip.description,
            start_date: trip.start_date,
            end_date: trip.end_date,
            is_completed: trip.is_completed,
            is_archived: trip.is_archived,
            user_id: trip.user_id,
            created_at: trip.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct TripDetailsResponse {
    pub trip: TripResponse,
    pub activities: Vec<ActivityResponse>,
    pub accommodations: Vec<AccommodationResponse>,
}

impl From<TripDetails> for TripDetailsResponse {
    fn from(details: TripDetails) -> Self {
        Self {
            trip: details.trip.into(),
            activities: details.activities.into_iter().map(Into::into).collect(),
            accommodations: details
                .accommodations
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct TripRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub activity_ids: Vec<Uuid>,
    #[serde(default)]
    pub accommodation_ids: Vec<Uuid>,
}

impl From<TripRequest> for TripDraft {
    fn from(body: TripRequest) -> Self {
        Self {
            name: body.name,
            description: body.description,
            start_date: body.start_date,
            end_date: body.end_date,
            is_completed: body.is_completed,
            is_archived: body.is_archived,
            activity_ids: body.activity_ids,
            accommodation_ids: body.accommodation_ids,
        }
    }
}

// ── GET /trips?force-refresh={bool} ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListTripsQuery {
    #[serde(default, rename = "force-refresh")]
    pub force_refresh: bool,
}

pub async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<ListTripsQuery>,
) -> Result<Json<Vec<TripResponse>>, TripsServiceError> {
    let usecase = ListTripsUseCase {
        repo: state.trip_repo(),
        cache: state.trip_cache.clone(),
    };
    let trips = usecase.execute(query.force_refresh).await?;
    Ok(Json(trips.iter().cloned().map(Into::into).collect()))
}

// ── GET /trips/{id} ──────────────────────────────────────────────────────────

pub async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripResponse>, TripsServiceError> {
    let usecase = GetTripUseCase {
        repo: state.trip_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── GET /trips/{id}/details ──────────────────────────────────────────────────

pub async fn get_trip_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripDetailsResponse>, TripsServiceError> {
    let usecase = GetTripDetailsUseCase {
        repo: state.trip_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /trips ──────────────────────────────────────────────────────────────

pub async fn create_trip(
    State(state): State<AppState>,
    identity: IdentityHeaders,
    Json(body): Json<TripRequest>,
) -> Result<(StatusCode, Json<TripResponse>), TripsServiceError> {
    let usecase = CreateTripUseCase {
        trips: state.trip_repo(),
        activities: state.activity_repo(),
        accommodations: state.accommodation_repo(),
        cache: state.trip_cache.clone(),
    };
    let trip = usecase.execute(identity.user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(trip.into())))
}

// ── PUT /trips/{id} ──────────────────────────────────────────────────────────

pub async fn update_trip(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    Path(id): Path<Uuid>,
    Json(body): Json<TripRequest>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = UpdateTripUseCase {
        trips: state.trip_repo(),
        activities: state.activity_repo(),
        accommodations: state.accommodation_repo(),
        cache: state.trip_cache.clone(),
    };
    usecase.execute(id, body.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /trips/{id} ───────────────────────────────────────────────────────

pub async fn delete_trip(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = DeleteTripUseCase {
        repo: state.trip_repo(),
        cache: state.trip_cache.clone(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /trips/{id}/activities ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ActivityLinkRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

pub async fn add_trip_activity(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    Path(trip_id): Path<Uuid>,
    Json(body): Json<ActivityLinkRequest>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = AddActivityLinkUseCase {
        trips: state.trip_repo(),
        activities: state.activity_repo(),
        cache: state.trip_cache.clone(),
    };
    let outcome = usecase
        .execute(
            trip_id,
            ActivityDraft {
                id: body.id,
                name: body.name,
                description: body.description,
                location: body.location,
            },
        )
        .await?;
    Ok(match outcome {
        LinkOutcome::Linked => StatusCode::CREATED,
        _ => StatusCode::OK,
    })
}

// ── DELETE /trips/{id}/activities/{activity_id} ──────────────────────────────

pub async fn remove_trip_activity(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    Path((trip_id, activity_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = RemoveActivityLinkUseCase {
        trips: state.trip_repo(),
        cache: state.trip_cache.clone(),
    };
    usecase.execute(trip_id, activity_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── POST /trips/{id}/accommodations ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct AccommodationLinkRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
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

pub async fn add_trip_accommodation(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    Path(trip_id): Path<Uuid>,
    Json(body): Json<AccommodationLinkRequest>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = AddAccommodationLinkUseCase {
        trips: state.trip_repo(),
        accommodations: state.accommodation_repo(),
        cache: state.trip_cache.clone(),
    };
    let outcome = usecase
        .execute(
            trip_id,
            AccommodationDraft {
                id: body.id,
                name: body.name,
                kind: body.kind,
                cost: body.cost,
                check_in: body.check_in,
                check_out: body.check_out,
                address: body.address,
            },
        )
        .await?;
    Ok(match outcome {
        LinkOutcome::Linked => StatusCode::CREATED,
        _ => StatusCode::OK,
    })
}

// ── DELETE /trips/{id}/accommodations/{accommodation_id} ─────────────────────

pub async fn remove_trip_accommodation(
    State(state): State<AppState>,
    _identity: IdentityHeaders,
    Path((trip_id, accommodation_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, TripsServiceError> {
    let usecase = RemoveAccommodationLinkUseCase {
        trips: state.trip_repo(),
        cache: state.trip_cache.clone(),
    };
    usecase.execute(trip_id, accommodation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
