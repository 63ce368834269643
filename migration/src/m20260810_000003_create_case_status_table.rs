use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaseStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(CaseStatus::Id))
                    .col(string(CaseStatus::Name))
                    .col(boolean(CaseStatus::IsActive).default(true))
                    .col(timestamp_null(CaseStatus::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaseStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CaseStatus {
    Table,
    Id,
    Name,
    IsActive,
    DeletedAt,
}
