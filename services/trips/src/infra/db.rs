use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use voyago_trips_schema::{
    accommodations, activities, trip_accommodations, trip_activities, trips,
};

use crate::domain::repository::{
    AccommodationRepository, ActivityRepository, TripRecord, TripRepository,
};
use crate::domain::types::{Accommodation, Activity, LinkOutcome, Trip, TripDetails};
use crate::error::TripsServiceError;

// ── Trip repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTripRepository {
    pub db: DatabaseConnection,
}

impl TripRepository for DbTripRepository {
    async fn list(&self) -> Result<Vec<Trip>, TripsServiceError> {
        let models = trips::Entity::find()
            .order_by_desc(trips::Column::StartDate)
            .all(&self.db)
            .await
            .context("list trips")?;
        Ok(models.into_iter().map(trip_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, TripsServiceError> {
        let model = trips::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find trip by id")?;
        Ok(model.map(trip_from_model))
    }

    async fn find_details(&self, id: Uuid) -> Result<Option<TripDetails>, TripsServiceError> {
        let Some(trip_model) = trips::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find trip by id")?
        else {
            return Ok(None);
        };

        let activity_ids: Vec<Uuid> = trip_activities::Entity::find()
            .filter(trip_activities::Column::TripId.eq(id))
            .all(&self.db)
            .await
            .context("list trip activity links")?
            .into_iter()
            .map(|link| link.activity_id)
            .collect();
        let accommodation_ids: Vec<Uuid> = trip_accommodations::Entity::find()
            .filter(trip_accommodations::Column::TripId.eq(id))
            .all(&self.db)
            .await
            .context("list trip accommodation links")?
            .into_iter()
            .map(|link| link.accommodation_id)
            .collect();

        let activities = activities::Entity::find()
            .filter(activities::Column::Id.is_in(activity_ids))
            .all(&self.db)
            .await
            .context("fetch linked activities")?
            .into_iter()
            .map(activity_from_model)
            .collect();
        let accommodations = accommodations::Entity::find()
            .filter(accommodations::Column::Id.is_in(accommodation_ids))
            .all(&self.db)
            .await
            .context("fetch linked accommodations")?
            .into_iter()
            .map(accommodation_from_model)
            .collect();

        Ok(Some(TripDetails {
            trip: trip_from_model(trip_model),
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
        let record = record.clone();
        let activity_ids = activity_ids.to_vec();
        let accommodation_ids = accommodation_ids.to_vec();
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    active_model_from_record(&record).insert(txn).await?;
                    for activity_id in activity_ids {
                        trip_activities::ActiveModel {
                            trip_id: Set(record.id),
                            activity_id: Set(activity_id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    for accommodation_id in accommodation_ids {
                        trip_accommodations::ActiveModel {
                            trip_id: Set(record.id),
                            accommodation_id: Set(accommodation_id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("create trip with links")?;
        Ok(())
    }

    async fn update_with_links(
        &self,
        record: &TripRecord,
        activity_ids: &[Uuid],
        accommodation_ids: &[Uuid],
    ) -> Result<bool, TripsServiceError> {
        let record = record.clone();
        let activity_ids = activity_ids.to_vec();
        let accommodation_ids = accommodation_ids.to_vec();
        let updated = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    if trips::Entity::find_by_id(record.id).one(txn).await?.is_none() {
                        return Ok(false);
                    }

                    active_model_from_record(&record).update(txn).await?;

                    trip_activities::Entity::delete_many()
                        .filter(trip_activities::Column::TripId.eq(record.id))
                        .exec(txn)
                        .await?;
                    trip_accommodations::Entity::delete_many()
                        .filter(trip_accommodations::Column::TripId.eq(record.id))
                        .exec(txn)
                        .await?;

                    for activity_id in activity_ids {
                        trip_activities::ActiveModel {
                            trip_id: Set(record.id),
                            activity_id: Set(activity_id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    for accommodation_id in accommodation_ids {
                        trip_accommodations::ActiveModel {
                            trip_id: Set(record.id),
                            accommodation_id: Set(accommodation_id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(true)
                })
            })
            .await
            .context("update trip with links")?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    trip_activities::Entity::delete_many()
                        .filter(trip_activities::Column::TripId.eq(id))
                        .exec(txn)
                        .await?;
                    trip_accommodations::Entity::delete_many()
                        .filter(trip_accommodations::Column::TripId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = trips::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete trip")?;
        Ok(deleted)
    }

    async fn link_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<LinkOutcome, TripsServiceError> {
        let outcome = self
            .db
            .transaction::<_, LinkOutcome, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    if trips::Entity::find_by_id(trip_id).one(txn).await?.is_none() {
                        return Ok(LinkOutcome::TripMissing);
                    }
                    let existing = trip_activities::Entity::find_by_id((trip_id, activity_id))
                        .one(txn)
                        .await?;
                    if existing.is_some() {
                        return Ok(LinkOutcome::AlreadyLinked);
                    }
                    trip_activities::ActiveModel {
                        trip_id: Set(trip_id),
                        activity_id: Set(activity_id),
                    }
                    .insert(txn)
                    .await?;
                    Ok(LinkOutcome::Linked)
                })
            })
            .await
            .context("link activity")?;
        Ok(outcome)
    }

    async fn unlink_activity(
        &self,
        trip_id: Uuid,
        activity_id: Uuid,
    ) -> Result<bool, TripsServiceError> {
        let result = trip_activities::Entity::delete_by_id((trip_id, activity_id))
            .exec(&self.db)
            .await
            .context("unlink activity")?;
        Ok(result.rows_affected > 0)
    }

    async fn link_accommodation(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<LinkOutcome, TripsServiceError> {
        let outcome = self
            .db
            .transaction::<_, LinkOutcome, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    if trips::Entity::find_by_id(trip_id).one(txn).await?.is_none() {
                        return Ok(LinkOutcome::TripMissing);
                    }
                    let existing =
                        trip_accommodations::Entity::find_by_id((trip_id, accommodation_id))
                            .one(txn)
                            .await?;
                    if existing.is_some() {
                        return Ok(LinkOutcome::AlreadyLinked);
                    }
                    trip_accommodations::ActiveModel {
                        trip_id: Set(trip_id),
                        accommodation_id: Set(accommodation_id),
                    }
                    .insert(txn)
                    .await?;
                    Ok(LinkOutcome::Linked)
                })
            })
            .await
            .context("link accommodation")?;
        Ok(outcome)
    }

    async fn unlink_accommodation(
        &self,
        trip_id: Uuid,
        accommodation_id: Uuid,
    ) -> Result<bool, TripsServiceError> {
        let result = trip_accommodations::Entity::delete_by_id((trip_id, accommodation_id))
            .exec(&self.db)
            .await
            .context("unlink accommodation")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Activity catalog ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityRepository {
    pub db: DatabaseConnection,
}

impl ActivityRepository for DbActivityRepository {
    async fn list(&self) -> Result<Vec<Activity>, TripsServiceError> {
        let models = activities::Entity::find()
            .order_by_asc(activities::Column::Name)
            .all(&self.db)
            .await
            .context("list activities")?;
        Ok(models.into_iter().map(activity_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Activity>, TripsServiceError> {
        let model = activities::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find activity by id")?;
        Ok(model.map(activity_from_model))
    }

    async fn create(&self, activity: &Activity) -> Result<(), TripsServiceError> {
        activities::ActiveModel {
            id: Set(activity.id),
            name: Set(activity.name.clone()),
            description: Set(activity.description.clone()),
            location: Set(activity.location.clone()),
            created_at: Set(activity.created_at),
        }
        .insert(&self.db)
        .await
        .context("create activity")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    trip_activities::Entity::delete_many()
                        .filter(trip_activities::Column::ActivityId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = activities::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete activity")?;
        Ok(deleted)
    }
}

// ── Accommodation catalog ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAccommodationRepository {
    pub db: DatabaseConnection,
}

impl AccommodationRepository for DbAccommodationRepository {
    async fn list(&self) -> Result<Vec<Accommodation>, TripsServiceError> {
        let models = accommodations::Entity::find()
            .order_by_asc(accommodations::Column::Name)
            .all(&self.db)
            .await
            .context("list accommodations")?;
        Ok(models.into_iter().map(accommodation_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Accommodation>, TripsServiceError> {
        let model = accommodations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find accommodation by id")?;
        Ok(model.map(accommodation_from_model))
    }

    async fn create(&self, accommodation: &Accommodation) -> Result<(), TripsServiceError> {
        accommodations::ActiveModel {
            id: Set(accommodation.id),
            name: Set(accommodation.name.clone()),
            kind: Set(accommodation.kind.clone()),
            cost: Set(accommodation.cost),
            check_in: Set(accommodation.check_in),
            check_out: Set(accommodation.check_out),
            address: Set(accommodation.address.clone()),
            created_at: Set(accommodation.created_at),
        }
        .insert(&self.db)
        .await
        .context("create accommodation")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, TripsServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    trip_accommodations::Entity::delete_many()
                        .filter(trip_accommodations::Column::AccommodationId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = accommodations::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete accommodation")?;
        Ok(deleted)
    }
}

// ── Model mapping ────────────────────────────────────────────────────────────

fn trip_from_model(model: trips::Model) -> Trip {
    Trip {
        id: model.id,
        name: model.name,
        description: model.description,
        start_date: model.start_date,
        end_date: model.end_date,
        is_completed: model.is_completed,
        is_archived: model.is_archived,
        user_id: model.user_id,
        created_at: model.created_at,
    }
}

fn activity_from_model(model: activities::Model) -> Activity {
    Activity {
        id: model.id,
        name: model.name,
        description: model.description,
        location: model.location,
        created_at: model.created_at,
    }
}

fn accommodation_from_model(model: accommodations::Model) -> Accommodation {
    Accommodation {
        id: model.id,
        name: model.name,
        kind: model.kind,
        cost: model.cost,
        check_in: model.check_in,
        check_out: model.check_out,
        address: model.address,
        created_at: model.created_at,
    }
}

fn active_model_from_record(record: &TripRecord) -> trips::ActiveModel {
    trips::ActiveModel {
        id: Set(record.id),
        name: Set(record.name.clone()),
        description: Set(record.description.clone()),
        start_date: Set(record.start_date),
        end_date: Set(record.end_date),
        is_completed: Set(record.is_completed),
        is_archived: Set(record.is_archived),
        user_id: Set(record.user_id),
        created_at: Set(record.created_at),
    }
}
