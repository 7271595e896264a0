use sea_orm::entity::prelude::*;

/// A planned journey owned by one user.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trip_activities::Entity")]
    TripActivities,
    #[sea_orm(has_many = "super::trip_accommodations::Entity")]
    TripAccommodations,
}

impl Related<super::trip_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripActivities.def()
    }
}

impl Related<super::trip_accommodations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripAccommodations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
