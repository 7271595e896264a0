#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Accommodation, Activity, LinkOutcome, Trip, TripDetails};
use crate::error::TripsServiceError;

/// Draft of a trip row; link sets are passed separately as resolved ids.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub is_completed: bool,
    pub is_archived: bool,
    pub user_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Repository for trip rows and their link tables.
pub trait TripRepository: Send + Sync {
    /// All trips ordered by start date, newest first.
    async fn list(&self) -> Result<Vec<Trip>, TripsServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, TripsServiceError>;
    async fn find_details(&self, id: Uuid) -> Result<Option<TripDetails>, TripsServiceError>;
    /// Insert the trip row and its link rows in one transaction.
    async fn create_with_links(
        &self,
        record: &TripRecord,
        activity_ids: &[Uuid],
        accommodation_ids: &[Uuid],
    ) -> Result<(), TripsServiceError>;
    /// Overwrite the scalar fields and replace both link sets in one
    /// transaction. `false` when the trip row does not exist; nothing is
    /// written in that case.
    async fn update_with_links(
        &self,
        record: &TripRecord,
        activity_ids: &[Uuid],
        accommodation_ids: &[Uuid],
    ) -> Result<bool, TripsServiceError>;
    /// Delete the link rows then the trip row. `false` when the trip was
    /// already gone.
    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError>;
    async fn link_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<LinkOutcome, TripsServiceError>;
    async fn unlink_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<bool, TripsServiceError>;
    async fn link_accommodation(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<LinkOutcome, TripsServiceError>;
    async fn unlink_accommodation(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<bool, TripsServiceError>;
}

/// Repository for the shared activity catalog.
pub trait ActivityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Activity>, TripsServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, TripsServiceError>;
    async fn create(&self, activity: &Activity) -> Result<(), TripsServiceError>;
    /// Remove the row and its link rows. `false` when already absent.
    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError>;
}

/// Repository for the shared accommodation catalog.
pub trait AccommodationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Accommodation>, TripsServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Accommodation>, TripsServiceError>;
    async fn create(&self, accommodation: &Accommodation) -> Result<(), TripsServiceError>;
    /// Remove the row and its link rows. `false` when already absent.
    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError>;
}
