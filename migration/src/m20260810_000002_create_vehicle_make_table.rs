use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_vehicle_type_table::VehicleType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleMake::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleMake::Id))
                    .col(string(VehicleMake::Name))
                    .col(integer(VehicleMake::VehicleTypeId))
                    .col(boolean(VehicleMake::IsActive).default(true))
                    .col(timestamp_null(VehicleMake::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_make_vehicle_type_id")
                            .from(VehicleMake::Table, VehicleMake::VehicleTypeId)
                            .to(VehicleType::Table, VehicleType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleMake::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleMake {
    Table,
    Id,
    Name,
    VehicleTypeId,
    IsActive,
    DeletedAt,
}
