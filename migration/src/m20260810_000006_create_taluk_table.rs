use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000005_create_district_table::District;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Taluk::Table)
                    .if_not_exists()
                    .col(pk_auto(Taluk::Id))
                    .col(string(Taluk::Name))
                    .col(integer(Taluk::DistrictId))
                    .col(boolean(Taluk::IsActive).default(true))
                    .col(timestamp_null(Taluk::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_taluk_district_id")
                            .from(Taluk::Table, Taluk::DistrictId)
                            .to(District::Table, District::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Taluk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Taluk {
    Table,
    Id,
    Name,
    DistrictId,
    IsActive,
    DeletedAt,
}
