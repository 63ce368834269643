//! District factory for creating test district entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test districts with customizable fields.
pub struct DistrictFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_active: bool,
    deleted: bool,
}

impl<'a> DistrictFactory<'a> {
    /// Creates a new DistrictFactory with default values.
    ///
    /// Defaults:
    /// - name: `"District {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("District {}", id),
            is_active: true,
            deleted: false,
        }
    }

    /// Sets the district name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the row soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the district entity into the database.
    pub async fn build(self) -> Result<entity::district::Model, DbErr> {
        entity::district::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a district with default values.
pub async fn create_district(db: &DatabaseConnection) -> Result<entity::district::Model, DbErr> {
    DistrictFactory::new(db).build().await
}
