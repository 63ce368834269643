use sea_orm::entity::prelude::*;

/// Configured SLA allowance per threshold type (agent pickup, dealer
/// payment). `allowed_seconds` is stored in seconds; classification compares
/// whole minutes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sla_threshold")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub threshold_type: i32,
    pub allowed_seconds: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
