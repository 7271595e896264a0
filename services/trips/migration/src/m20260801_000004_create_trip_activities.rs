use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripActivities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TripActivities::TripId).uuid().not_null())
                    .col(
                        ColumnDef::new(TripActivities::ActivityId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TripActivities::TripId)
                            .col(TripActivities::ActivityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TripActivities::Table, TripActivities::TripId)
                            .to(Trips::Table, Trips::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TripActivities::Table, TripActivities::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripActivities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TripActivities {
    Table,
    TripId,
    ActivityId,
}

#[derive(Iden)]
enum Trips {
    Table,
    Id,
}

#[derive(Iden)]
enum Activities {
    Table,
    Id,
}
