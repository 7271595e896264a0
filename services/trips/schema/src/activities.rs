use sea_orm::entity::prelude::*;

/// Catalog entry for something to do. Shared across trips.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trip_activities::Entity")]
    TripActivities,
}

impl Related<super::trip_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripActivities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
