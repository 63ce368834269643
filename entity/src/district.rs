use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "district")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub is_active: bool,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::taluk::Entity")]
    Taluk,
}

impl Related<super::taluk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taluk.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
