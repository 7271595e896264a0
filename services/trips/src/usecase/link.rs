use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::repository::{AccommodationRepository, ActivityRepository, TripRepository};
use crate::domain::types::{Accommodation, Activity, LinkOutcome};
use crate::error::TripsServiceError;
use crate::infra::cache::TripListCache;

/// Catalog activity supplied alongside a link request. Without a known id
/// the catalog row is created first.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub description: String,
    pub location: String,
}

/// Accommodation twin of [`ActivityDraft`].
#[derive(Debug, Clone)]
pub struct AccommodationDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub kind: String,
    pub cost: f64,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub address: String,
}

// ── AddActivityLink ──────────────────────────────────────────────────────────

pub struct AddActivityLinkUseCase<T, A>
where
    T: TripRepository,
    A: ActivityRepository,
{
    pub trips: T,
    pub activities: A,
    pub cache: Arc<TripListCache>,
}

impl<T, A> AddActivityLinkUseCase<T, A>
where
    T: TripRepository,
    A: ActivityRepository,
{
    /// Materialize the catalog row when needed, then link it. Re-adding an
    /// existing link is a no-op.
    pub async fn execute(
        &self,
        trip_id: Uuid,
        draft: ActivityDraft,
    ) -> Result<LinkOutcome, TripsServiceError> {
        let activity_id = match draft.id {
            Some(id) if self.activities.find_by_id(id).await?.is_some() => id,
            _ => {
                if draft.name.trim().is_empty() {
                    return Err(TripsServiceError::MissingName);
                }
                let activity = Activity {
                    id: Uuid::now_v7(),
                    name: draft.name.trim().to_owned(),
                    description: draft.description,
                    location: draft.location,
                    created_at: Utc::now(),
                };
                self.activities.create(&activity).await?;
                activity.id
            }
        };

        let outcome = self.trips.link_activity(trip_id, activity_id).await?;
        match outcome {
            LinkOutcome::TripMissing => Err(TripsServiceError::TripNotFound),
            LinkOutcome::Linked => {
                self.cache.invalidate().await;
                Ok(outcome)
            }
            LinkOutcome::AlreadyLinked => Ok(outcome),
        }
    }
}

// ── RemoveActivityLink ───────────────────────────────────────────────────────

pub struct RemoveActivityLinkUseCase<T: TripRepository> {
    pub trips: T,
    pub cache: Arc<TripListCache>,
}

impl<T: TripRepository> RemoveActivityLinkUseCase<T> {
    /// Removing an absent link is a no-op.
    pub async fn execute(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<(), TripsServiceError> {
        if self.trips.unlink_activity(trip_id, activity_id).await? {
            self.cache.invalidate().await;
        }
        Ok(())
    }
}

// ── AddAccommodationLink ─────────────────────────────────────────────────────

pub struct AddAccommodationLinkUseCase<T, C>
where
    T: TripRepository,
    C: AccommodationRepository,
{
    pub trips: T,
    pub accommodations: C,
    pub cache: Arc<TripListCache>,
}

impl<T, C> AddAccommodationLinkUseCase<T, C>
where
    T: TripRepository,
    C: AccommodationRepository,
{
    pub async fn execute(
        &self,
        trip_id: Uuid,
        draft: AccommodationDraft,
    ) -> Result<LinkOutcome, TripsServiceError> {
        let accommodation_id = match draft.id {
            Some(id) if self.accommodations.find_by_id(id).await?.is_some() => id,
            _ => {
                if draft.name.trim().is_empty() {
                    return Err(TripsServiceError::MissingName);
                }
                let accommodation = Accommodation {
                    id: Uuid::now_v7(),
                    name: draft.name.trim().to_owned(),
                    kind: draft.kind,
                    cost: draft.cost,
                    check_in: draft.check_in,
                    check_out: draft.check_out,
                    address: draft.address,
                    created_at: Utc::now(),
                };
                self.accommodations.create(&accommodation).await?;
                accommodation.id
            }
        };

        let outcome = self
            .trips
            .link_accommodation(trip_id, accommodation_id)
            .await?;
        match outcome {
            LinkOutcome::TripMissing => Err(TripsServiceError::TripNotFound),
            LinkOutcome::Linked => {
                self.cache.invalidate().await;
                Ok(outcome)
            }
            LinkOutcome::AlreadyLinked => Ok(outcome),
        }
    }
}

// ── RemoveAccommodationLink ──────────────────────────────────────────────────

pub struct RemoveAccommodationLinkUseCase<T: TripRepository> {
    pub trips: T,
    pub cache: Arc<TripListCache>,
}

impl<T: TripRepository> RemoveAccommodationLinkUseCase<T> {
    pub async fn execute(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<(), TripsServiceError> {
        if self
            .trips
            .unlink_accommodation(trip_id, accommodation_id)
            .await?
        {
            self.cache.invalidate().await;
        }
        Ok(())
    }
}
