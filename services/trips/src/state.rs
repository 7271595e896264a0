use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::cache::TripListCache;
use crate::infra::db::{DbAccommodationRepository, DbActivityRepository, DbTripRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub trip_cache: Arc<TripListCache>,
}

impl AppState {
    pub fn trip_repo(&self) -> DbTripRepository {
        DbTripRepository {
            db: self.db.clone(),
        }
    }

    pub fn activity_repo(&self) -> DbActivityRepository {
        DbActivityRepository {
            db: self.db.clone(),
        }
    }

    pub fn accommodation_repo(&self) -> DbAccommodationRepository {
        DbAccommodationRepository {
            db: self.db.clone(),
        }
    }
}
