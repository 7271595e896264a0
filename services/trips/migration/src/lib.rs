use sea_orm_migration::prelude::*;

mod m20260801_000001_create_trips;
mod m20260801_000002_create_activities;
mod m20260801_000003_create_accommodations;
mod m20260801_000004_create_trip_activities;
mod m20260801_000005_create_trip_accommodations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_trips::Migration),
            Box::new(m20260801_000002_create_activities::Migration),
            Box::new(m20260801_000003_create_accommodations::Migration),
            Box::new(m20260801_000004_create_trip_activities::Migration),
            Box::new(m20260801_000005_create_trip_accommodations::Migration),
        ]
    }
}
