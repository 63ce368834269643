use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleType::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleType::Id))
                    .col(string(VehicleType::Name))
                    .col(boolean(VehicleType::IsActive).default(true))
                    .col(timestamp_null(VehicleType::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleType {
    Table,
    Id,
    Name,
    IsActive,
    DeletedAt,
}
