use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    /// Soft-delete marker. Reports keep resolving deleted rows so historical
    /// data stays readable.
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_make::Entity")]
    VehicleMake,
}

impl Related<super::vehicle_make::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleMake.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
