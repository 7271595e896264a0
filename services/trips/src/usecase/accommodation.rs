use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::repository::AccommodationRepository;
use crate::domain::types::Accommodation;
use crate::error::TripsServiceError;

pub struct AccommodationInput {
    pub name: String,
    pub kind: String,
    pub cost: f64,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub address: String,
}

// ── ListAccommodations ───────────────────────────────────────────────────────

pub struct ListAccommodationsUseCase<C: AccommodationRepository> {
    pub repo: C,
}

impl<C: AccommodationRepository> ListAccommodationsUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Accommodation>, TripsServiceError> {
        self.repo.list().await
    }
}

// ── CreateAccommodation ──────────────────────────────────────────────────────

pub struct CreateAccommodationUseCase<C: AccommodationRepository> {
    pub repo: C,
}

impl<C: AccommodationRepository> CreateAccommodationUseCase<C> {
    pub async fn execute(
        &self,
        input: AccommodationInput,
    ) -> Result<Accommodation, TripsServiceError> {
        if input.name.trim().is_empty() {
            return Err(TripsServiceError::MissingName);
        }
        let accommodation = Accommodation {
            id: Uuid::now_v7(),
            name: input.name.trim().to_owned(),
            kind: input.kind,
            cost: input.cost,
            check_in: input.check_in,
            check_out: input.check_out,
            address: input.address,
            created_at: Utc::now(),
        };
        self.repo.create(&accommodation).await?;
        Ok(accommodation)
    }
}

// ── DeleteAccommodation ──────────────────────────────────────────────────────

pub struct DeleteAccommodationUseCase<C: AccommodationRepository> {
    pub repo: C,
}

impl<C: AccommodationRepository> DeleteAccommodationUseCase<C> {
    /// Deleting an absent row is a no-op.
    pub async fn execute(&self, id: Uuid) -> Result<(), TripsServiceError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::usecase::fixtures::{InMemoryAccommodationRepo, InMemoryStore};

    fn repo(store: &Arc<InMemoryStore>) -> InMemoryAccommodationRepo {
        InMemoryAccommodationRepo {
            store: Arc::clone(store),
        }
    }

    #[tokio::test]
    async fn should_create_and_list_accommodations() {
        let store = Arc::new(InMemoryStore::default());
        let create = CreateAccommodationUseCase { repo: repo(&store) };

        let accommodation = create
            .execute(AccommodationInput {
                name: "Hotel Roma".to_owned(),
                kind: "hotel".to_owned(),
                cost: 120.0,
                check_in: Some("2026-05-01".parse().unwrap()),
                check_out: Some("2026-05-10".parse().unwrap()),
                address: "Via Nazionale 1".to_owned(),
            })
            .await
            .unwrap();

        let list = ListAccommodationsUseCase { repo: repo(&store) };
        assert_eq!(list.execute().await.unwrap(), vec![accommodation]);
    }

    #[tokio::test]
    async fn should_require_accommodation_name() {
        let store = Arc::new(InMemoryStore::default());
        let create = CreateAccommodationUseCase { repo: repo(&store) };

        let result = create
            .execute(AccommodationInput {
                name: String::new(),
                kind: String::new(),
                cost: 0.0,
                check_in: None,
                check_out: None,
                address: String::new(),
            })
            .await;
        assert!(matches!(result, Err(TripsServiceError::MissingName)));
    }

    #[tokio::test]
    async fn should_delete_accommodation_and_its_links() {
        let store = Arc::new(InMemoryStore::default());
        let trip = store.seed_trip("Rome");
        let accommodation = store.seed_accommodation("Hotel Roma");
        store
            .accommodation_links
            .lock()
            .unwrap()
            .push((trip.id, accommodation.id));

        let delete = DeleteAccommodationUseCase { repo: repo(&store) };
        delete.execute(accommodation.id).await.unwrap();

        assert!(store.accommodations.lock().unwrap().is_empty());
        assert!(store.accommodation_links.lock().unwrap().is_empty());
    }
}
