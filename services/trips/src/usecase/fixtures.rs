//! In-memory repositories shared by the usecase tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{
    AccommodationRepository, ActivityRepository, TripRecord, TripRepository,
};
use crate::domain::types::{Accommodation, Activity, LinkOutcome, Trip, TripDetails};
use crate::error::TripsServiceError;

#[derive(Default)]
pub struct InMemoryStore {
    pub trips: Mutex<Vec<Trip>>,
    pub activities: Mutex<Vec<Activity>>,
    pub accommodations: Mutex<Vec<Accommodation>>,
    pub activity_links: Mutex<Vec<(Uuid, Uuid)>>,
    pub accommodation_links: Mutex<Vec<(Uuid, Uuid)>>,
    pub trip_list_calls: AtomicUsize,
    pub fail_trip_list: AtomicBool,
    pub fail_activity_lookup: AtomicBool,
}

impl InMemoryStore {
    pub fn seed_activity(&self, name: &str) -> Activity {
        let activity = Activity {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            description: String::new(),
            location: String::new(),
            created_at: Utc::now(),
        };
        self.activities.lock().unwrap().push(activity.clone());
        activity
    }

    pub fn seed_accommodation(&self, name: &str) -> Accommodation {
        let accommodation = Accommodation {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            kind: String::new(),
            cost: 0.0,
            check_in: None,
            check_out: None,
            address: String::new(),
            created_at: Utc::now(),
        };
        self.accommodations
            .lock()
            .unwrap()
            .push(accommodation.clone());
        accommodation
    }

    pub fn seed_trip(&self, name: &str) -> Trip {
        let trip = Trip {
            id: Uuid::now_v7(),
            name: name.to_owned(),
            description: String::new(),
            start_date: "2026-05-01".parse().unwrap(),
            end_date: "2026-05-10".parse().unwrap(),
            is_completed: false,
            is_archived: false,
            user_id: Uuid::now_v7(),
            created_at: Utc::now(),
        };
        self.trips.lock().unwrap().push(trip.clone());
        trip
    }

    pub fn activity_links_for(&self, trip_id: Uuid) -> Vec<Uuid> {
        self.activity_links
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == trip_id)
            .map(|(_, a)| *a)
            .collect()
    }

    pub fn accommodation_links_for(&self, trip_id: Uuid) -> Vec<Uuid> {
        self.accommodation_links
            .lock()
            .unwrap()
            .iter()
            .filter(|(t, _)| *t == trip_id)
            .map(|(_, a)| *a)
            .collect()
    }

    fn storage_error() -> TripsServiceError {
        TripsServiceError::Internal(anyhow::anyhow!("storage unavailable"))
    }
}

#[derive(Clone)]
pub struct InMemoryTripRepo {
    pub store: Arc<InMemoryStore>,
}

impl TripRepository for InMemoryTripRepo {
    async fn list(&self) -> Result<Vec<Trip>, TripsServiceError> {
        self.store.trip_list_calls.fetch_add(1, Ordering::SeqCst);
        if self.store.fail_trip_list.load(Ordering::SeqCst) {
            return Err(InMemoryStore::storage_error());
        }
        let mut trips = self.store.trips.lock().unwrap().clone();
        trips.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(trips)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, TripsServiceError> {
        Ok(self
            .store
            .trips
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn find_details(&self, id: Uuid) -> Result<Option<TripDetails>, TripsServiceError> {
        let Some(trip) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let activity_ids = self.store.activity_links_for(id);
        let accommodation_ids = self.store.accommodation_links_for(id);
        let activities = self
            .store
            .activities
            .lock()
            .unwrap()
            .iter()
            .filter(|a| activity_ids.contains(&a.id))
            .cloned()
            .collect();
        let accommodations = self
            .store
            .accommodations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| accommodation_ids.contains(&a.id))
            .cloned()
            .collect();
        Ok(Some(TripDetails {
            trip,
            activities,
            accommodations,
        }))
    }

    async fn create_with_links(
        &self,
        record: &TripRecord,
        activity_ids: &[Uuid],
        accommodation_ids: &[Uuid],
    ) -> Result<(), TripsServiceError> {
        self.store.trips.lock().unwrap().push(trip_from_record(record));
        let mut links = self.store.activity_links.lock().unwrap();
        for activity_id in activity_ids {
            links.push((record.id, *activity_id));
        }
        let mut links = self.store.accommodation_links.lock().unwrap();
        for accommodation_id in accommodation_ids {
            links.push((record.id, *accommodation_id));
        }
        Ok(())
    }

    async fn update_with_links(
        &self,
        record: &TripRecord,
        activity_ids: &[Uuid],
        accommodation_ids: &[Uuid],
    ) -> Result<bool, TripsServiceError> {
        let mut trips = self.store.trips.lock().unwrap();
        let Some(slot) = trips.iter_mut().find(|t| t.id == record.id) else {
            return Ok(false);
        };
        *slot = trip_from_record(record);
        drop(trips);

        let mut links = self.store.activity_links.lock().unwrap();
        links.retain(|(t, _)| *t != record.id);
        for activity_id in activity_ids {
            links.push((record.id, *activity_id));
        }
        drop(links);
        let mut links = self.store.accommodation_links.lock().unwrap();
        links.retain(|(t, _)| *t != record.id);
        for accommodation_id in accommodation_ids {
            links.push((record.id, *accommodation_id));
        }
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError> {
        self.store
            .activity_links
            .lock()
            .unwrap()
            .retain(|(t, _)| *t != id);
        self.store
            .accommodation_links
            .lock()
            .unwrap()
            .retain(|(t, _)| *t != id);
        let mut trips = self.store.trips.lock().unwrap();
        let before = trips.len();
        trips.retain(|t| t.id != id);
        Ok(trips.len() < before)
    }

    async fn link_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<LinkOutcome, TripsServiceError> {
        if self.find_by_id(trip_id).await?.is_none() {
            return Ok(LinkOutcome::TripMissing);
        }
        let mut links = self.store.activity_links.lock().unwrap();
        if links.contains(&(trip_id, activity_id)) {
            return Ok(LinkOutcome::AlreadyLinked);
        }
        links.push((trip_id, activity_id));
        Ok(LinkOutcome::Linked)
    }

    async fn unlink_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<bool, TripsServiceError> {
        let mut links = self.store.activity_links.lock().unwrap();
        let before = links.len();
        links.retain(|pair| *pair != (trip_id, activity_id));
        Ok(links.len() < before)
    }

    async fn link_accommodation(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<LinkOutcome, TripsServiceError> {
        if self.find_by_id(trip_id).await?.is_none() {
            return Ok(LinkOutcome::TripMissing);
        }
        let mut links = self.store.accommodation_links.lock().unwrap();
        if links.contains(&(trip_id, accommodation_id)) {
            return Ok(LinkOutcome::AlreadyLinked);
        }
        links.push((trip_id, accommodation_id));
        Ok(LinkOutcome::Linked)
    }

    async fn unlink_accommodation(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<bool, TripsServiceError> {
        let mut links = self.store.accommodation_links.lock().unwrap();
        let before = links.len();
        links.retain(|pair| *pair != (trip_id, accommodation_id));
        Ok(links.len() < before)
    }
}

#[derive(Clone)]
pub struct InMemoryActivityRepo {
    pub store: Arc<InMemoryStore>,
}

impl ActivityRepository for InMemoryActivityRepo {
    async fn list(&self) -> Result<Vec<Activity>, TripsServiceError> {
        Ok(self.store.activities.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, TripsServiceError> {
        if self.store.fail_activity_lookup.load(Ordering::SeqCst) {
            return Err(InMemoryStore::storage_error());
        }
        Ok(self
            .store
            .activities
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, activity: &Activity) -> Result<(), TripsServiceError> {
        self.store.activities.lock().unwrap().push(activity.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError> {
        self.store
            .activity_links
            .lock()
            .unwrap()
            .retain(|(_, a)| *a != id);
        let mut activities = self.store.activities.lock().unwrap();
        let before = activities.len();
        activities.retain(|a| a.id != id);
        Ok(activities.len() < before)
    }
}

#[derive(Clone)]
pub struct InMemoryAccommodationRepo {
    pub store: Arc<InMemoryStore>,
}

impl AccommodationRepository for InMemoryAccommodationRepo {
    async fn list(&self) -> Result<Vec<Accommodation>, TripsServiceError> {
        Ok(self.store.accommodations.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Accommodation>, TripsServiceError> {
        Ok(self
            .store
            .accommodations
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn create(&self, accommodation: &Accommodation) -> Result<(), TripsServiceError> {
        self.store
            .accommodations
            .lock()
            .unwrap()
            .push(accommodation.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError> {
        self.store
            .accommodation_links
            .lock()
            .unwrap()
            .retain(|(_, a)| *a != id);
        let mut accommodations = self.store.accommodations.lock().unwrap();
        let before = accommodations.len();
        accommodations.retain(|a| a.id != id);
        Ok(accommodations.len() < before)
    }
}

fn trip_from_record(record: &TripRecord) -> Trip {
    Trip {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        start_date: record.start_date,
        end_date: record.end_date,
        is_completed: record.is_completed,
        is_archived: record.is_archived,
        user_id: record.user_id,
        created_at: record.created_at,
    }
}
