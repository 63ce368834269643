//! Case status factory for creating test case status entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test case statuses with customizable fields.
pub struct CaseStatusFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_active: bool,
    deleted: bool,
}

impl<'a> CaseStatusFactory<'a> {
    /// Creates a new CaseStatusFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Case Status {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Case Status {}", id),
            is_active: true,
            deleted: false,
        }
    }

    /// Sets the case status name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the row soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the case status entity into the database.
    pub async fn build(self) -> Result<entity::case_status::Model, DbErr> {
        entity::case_status::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a case status with default values.
pub async fn create_case_status(
    db: &DatabaseConnection,
) -> Result<entity::case_status::Model, DbErr> {
    CaseStatusFactory::new(db).build().await
}
