//! Reason factory for creating test reason entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test reasons with customizable fields.
pub struct ReasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_active: bool,
    deleted: bool,
}

impl<'a> ReasonFactory<'a> {
    /// Creates a new ReasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Reason {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Reason {}", id),
            is_active: true,
            deleted: false,
        }
    }

    /// Sets the reason name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the row soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the reason entity into the database.
    pub async fn build(self) -> Result<entity::reason::Model, DbErr> {
        entity::reason::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reason with default values.
pub async fn create_reason(db: &DatabaseConnection) -> Result<entity::reason::Model, DbErr> {
    ReasonFactory::new(db).build().await
}
