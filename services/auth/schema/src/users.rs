use sea_orm::entity::prelude::*;

/// Account record owned by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub surname: String,
    pub given_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_digest: String,
    pub reward_points: i32,
    pub is_active: bool,
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
