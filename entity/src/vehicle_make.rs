use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle_make")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub vehicle_type_id: i32,
    pub is_active: bool,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle_type::Entity",
        from = "Column::VehicleTypeId",
        to = "super::vehicle_type::Column::Id"
    )]
    VehicleType,
}

impl Related<super::vehicle_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
