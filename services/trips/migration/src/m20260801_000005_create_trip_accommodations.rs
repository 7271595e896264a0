use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TripAccommodations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TripAccommodations::TripId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TripAccommodations::AccommodationId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TripAccommodations::TripId)
                            .col(TripAccommodations::AccommodationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TripAccommodations::Table, TripAccommodations::TripId)
                            .to(Trips::Table, Trips::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                TripAccommodations::Table,
                                TripAccommodations::AccommodationId,
                            )
                            .to(Accommodations::Table, Accommodations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TripAccommodations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TripAccommodations {
    Table,
    TripId,
    AccommodationId,
}

#[derive(Iden)]
enum Trips {
    Table,
    Id,
}

#[derive(Iden)]
enum Accommodations {
    Table,
    Id,
}
