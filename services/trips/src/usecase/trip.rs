use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::repository::{
    AccommodationRepository, ActivityRepository, TripRecord, TripRepository,
};
use crate::domain::types::{Trip, TripDetails, normalize_status, validate_date_range};
use crate::error::TripsServiceError;
use crate::infra::cache::TripListCache;

/// User-supplied trip fields plus the catalog ids to link.
#[derive(Debug, Clone)]
pub struct TripDraft {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_completed: bool,
    pub is_archived: bool,
    pub activity_ids: Vec<Uuid>,
    pub accommodation_ids: Vec<Uuid>,
}

fn validate_draft(draft: &TripDraft) -> Result<(), TripsServiceError> {
    if draft.name.trim().is_empty() {
        return Err(TripsServiceError::MissingName);
    }
    validate_date_range(draft.start_date, draft.end_date)
}

/// Keep the ids that exist in the catalog, dropping unknowns and duplicates.
/// Order of first occurrence is preserved.
async fn resolve_activity_ids<A: ActivityRepository>(
    repo: &A,
    ids: &[Uuid],
) -> Result<Vec<Uuid>, TripsServiceError> {
    let mut resolved = Vec::new();
    for id in ids {
        if resolved.contains(id) {
            continue;
        }
        if repo.find_by_id(*id).await?.is_some() {
            resolved.push(*id);
        }
    }
    Ok(resolved)
}

async fn resolve_accommodation_ids<C: AccommodationRepository>(
    repo: &C,
    ids: &[Uuid],
) -> Result<Vec<Uuid>, TripsServiceError> {
    let mut resolved = Vec::new();
    for id in ids {
        if resolved.contains(id) {
            continue;
        }
        if repo.find_by_id(*id).await?.is_some() {
            resolved.push(*id);
        }
    }
    Ok(resolved)
}

// ── ListTrips ────────────────────────────────────────────────────────────────

pub struct ListTripsUseCase<R: TripRepository> {
    pub repo: R,
    pub cache: Arc<TripListCache>,
}

impl<R: TripRepository> ListTripsUseCase<R> {
    /// A fresh cached snapshot is returned as-is; otherwise the repository
    /// is queried and the result cached. A repository failure propagates
    /// and leaves the cache untouched.
    pub async fn execute(&self, force_refresh: bool) -> Result<Arc<Vec<Trip>>, TripsServiceError> {
        if !force_refresh {
            if let Some(snapshot) = self.cache.get().await {
                return Ok(snapshot);
            }
        }
        let trips = self.repo.list().await?;
        Ok(self.cache.put(trips).await)
    }
}

// ── GetTrip ──────────────────────────────────────────────────────────────────

pub struct GetTripUseCase<R: TripRepository> {
    pub repo: R,
}

impl<R: TripRepository> GetTripUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Trip, TripsServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TripsServiceError::TripNotFound)
    }
}

// ── GetTripDetails ───────────────────────────────────────────────────────────

pub struct GetTripDetailsUseCase<R: TripRepository> {
    pub repo: R,
}

impl<R: TripRepository> GetTripDetailsUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<TripDetails, TripsServiceError> {
        self.repo
            .find_details(id)
            .await?
            .ok_or(TripsServiceError::TripNotFound)
    }
}

// ── CreateTrip ───────────────────────────────────────────────────────────────

pub struct CreateTripUseCase<R, A, C>
where
    R: TripRepository,
    A: ActivityRepository,
    C: AccommodationRepository,
{
    pub trips: R,
    pub activities: A,
    pub accommodations: C,
    pub cache: Arc<TripListCache>,
}

impl<R, A, C> CreateTripUseCase<R, A, C>
where
    R: TripRepository,
    A: ActivityRepository,
    C: AccommodationRepository,
{
    /// Unknown catalog ids are silently dropped, never materialized.
    pub async fn execute(&self, user_id: Uuid, draft: TripDraft) -> Result<Trip, TripsServiceError> {
        validate_draft(&draft)?;
        let activity_ids = resolve_activity_ids(&self.activities, &draft.activity_ids).await?;
        let accommodation_ids =
            resolve_accommodation_ids(&self.accommodations, &draft.accommodation_ids).await?;

        let (is_completed, is_archived) = normalize_status(draft.is_completed, draft.is_archived);
        let record = TripRecord {
            id: Uuid::now_v7(),
            name: draft.name.trim().to_owned(),
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_completed,
            is_archived,
            user_id,
            created_at: Utc::now(),
        };
        self.trips
            .create_with_links(&record, &activity_ids, &accommodation_ids)
            .await?;
        self.cache.invalidate().await;

        Ok(Trip {
            id: record.id,
            name: record.name,
            description: record.description,
            start_date: record.start_date,
            end_date: record.end_date,
            is_completed: record.is_completed,
            is_archived: record.is_archived,
            user_id: record.user_id,
            created_at: record.created_at,
        })
    }
}

// ── UpdateTrip ───────────────────────────────────────────────────────────────

pub struct UpdateTripUseCase<R, A, C>
where
    R: TripRepository,
    A: ActivityRepository,
    C: AccommodationRepository,
{
    pub trips: R,
    pub activities: A,
    pub accommodations: C,
    pub cache: Arc<TripListCache>,
}

impl<R, A, C> UpdateTripUseCase<R, A, C>
where
    R: TripRepository,
    A: ActivityRepository,
    C: AccommodationRepository,
{
    /// Full replace: scalar fields are overwritten and both link sets are
    /// replaced with the resolved drafts. Owner and creation time are kept.
    pub async fn execute(&self, id: Uuid, draft: TripDraft) -> Result<(), TripsServiceError> {
        validate_draft(&draft)?;
        let existing = self
            .trips
            .find_by_id(id)
            .await?
            .ok_or(TripsServiceError::TripNotFound)?;

        let activity_ids = resolve_activity_ids(&self.activities, &draft.activity_ids).await?;
        let accommodation_ids =
            resolve_accommodation_ids(&self.accommodations, &draft.accommodation_ids).await?;

        let (is_completed, is_archived) = normalize_status(draft.is_completed, draft.is_archived);
        let record = TripRecord {
            id,
            name: draft.name.trim().to_owned(),
            description: draft.description,
            start_date: draft.start_date,
            end_date: draft.end_date,
            is_completed,
            is_archived,
            user_id: existing.user_id,
            created_at: existing.created_at,
        };
        let updated = self
            .trips
            .update_with_links(&record, &activity_ids, &accommodation_ids)
            .await?;
        if !updated {
            return Err(TripsServiceError::TripNotFound);
        }
        self.cache.invalidate().await;
        Ok(())
    }
}

// ── DeleteTrip ───────────────────────────────────────────────────────────────

pub struct DeleteTripUseCase<R: TripRepository> {
    pub repo: R,
    pub cache: Arc<TripListCache>,
}

impl<R: TripRepository> DeleteTripUseCase<R> {
    /// Deleting an already-absent trip is a success.
    pub async fn execute(&self, id: Uuid) -> Result<(), TripsServiceError> {
        self.repo.delete(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }
}
