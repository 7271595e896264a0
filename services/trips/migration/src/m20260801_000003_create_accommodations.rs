use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accommodations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accommodations::Name).string().not_null())
                    .col(
                        ColumnDef::new(Accommodations::Kind)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Accommodations::Cost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Accommodations::CheckIn).date().null())
                    .col(ColumnDef::new(Accommodations::CheckOut).date().null())
                    .col(
                        ColumnDef::new(Accommodations::Address)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Accommodations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accommodations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Accommodations {
    Table,
    Id,
    Name,
    Kind,
    Cost,
    CheckIn,
    CheckOut,
    Address,
    CreatedAt,
}
