use sea_orm::entity::prelude::*;

/// Catalog entry for a place to stay. Shared across trips.
// `cost` is a double, so no `Eq` here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accommodations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub cost: f64,
    pub check_in: Option<chrono::NaiveDate>,
    pub check_out: Option<chrono::NaiveDate>,
    pub address: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trip_accommodations::Entity")]
    TripAccommodations,
}

impl Related<super::trip_accommodations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TripAccommodations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
