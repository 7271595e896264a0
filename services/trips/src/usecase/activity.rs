use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ActivityRepository;
use crate::domain::types::Activity;
use crate::error::TripsServiceError;

pub struct ActivityInput {
    pub name: String,
    pub description: String,
    pub location: String,
}

// ── ListActivities ───────────────────────────────────────────────────────────

pub struct ListActivitiesUseCase<A: ActivityRepository> {
    pub repo: A,
}

impl<A: ActivityRepository> ListActivitiesUseCase<A> {
    pub async fn execute(&self) -> Result<Vec<Activity>, TripsServiceError> {
        self.repo.list().await
    }
}

// ── CreateActivity ───────────────────────────────────────────────────────────

pub struct CreateActivityUseCase<A: ActivityRepository> {
    pub repo: A,
}

impl<A: ActivityRepository> CreateActivityUseCase<A> {
    pub async fn execute(&self, input: ActivityInput) -> Result<Activity, TripsServiceError> {
        if input.name.trim().is_empty() {
            return Err(TripsServiceError::MissingName);
        }
        let activity = Activity {
            id: Uuid::now_v7(),
            name: input.name.trim().to_owned(),
            description: input.description,
            location: input.location,
            created_at: Utc::now(),
        };
        self.repo.create(&activity).await?;
        Ok(activity)
    }
}

// ── DeleteActivity ───────────────────────────────────────────────────────────

pub struct DeleteActivityUseCase<A: ActivityRepository> {
    pub repo: A,
}

impl<A: ActivityRepository> DeleteActivityUseCase<A> {
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

    use crate::usecase::fixtures::{InMemoryActivityRepo, InMemoryStore};

    fn repo(store: &Arc<InMemoryStore>) -> InMemoryActivityRepo {
        InMemoryActivityRepo {
            store: Arc::clone(store),
        }
    }

    #[tokio::test]
    async fn should_create_and_list_activities() {
        let store = Arc::new(InMemoryStore::default());
        let create = CreateActivityUseCase { repo: repo(&store) };

        let activity = create
            .execute(ActivityInput {
                name: " Colosseum ".to_owned(),
                description: "guided tour".to_owned(),
                location: "Rome".to_owned(),
            })
            .await
            .unwrap();
        assert_eq!(activity.name, "Colosseum");

        let list = ListActivitiesUseCase { repo: repo(&store) };
        assert_eq!(list.execute().await.unwrap(), vec![activity]);
    }

    #[tokio::test]
    async fn should_require_activity_name() {
        let store = Arc::new(InMemoryStore::default());
        let create = CreateActivityUseCase { repo: repo(&store) };

        let result = create
            .execute(ActivityInput {
                name: "  ".to_owned(),
                description: String::new(),
                location: String::new(),
            })
            .await;
        assert!(matches!(result, Err(TripsServiceError::MissingName)));
        assert!(store.activities.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_delete_activity_and_its_links() {
        let store = Arc::new(InMemoryStore::default());
        let trip = store.seed_trip("Rome");
        let activity = store.seed_activity("Colosseum");
        store
            .activity_links
            .lock()
            .unwrap()
            .push((trip.id, activity.id));

        let delete = DeleteActivityUseCase { repo: repo(&store) };
        delete.execute(activity.id).await.unwrap();

        assert!(store.activities.lock().unwrap().is_empty());
        assert!(store.activity_links.lock().unwrap().is_empty());
        // Absent row is a no-op.
        assert!(delete.execute(activity.id).await.is_ok());
    }
}
