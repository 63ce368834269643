//! SLA threshold factory for creating test threshold entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test SLA thresholds with customizable fields.
pub struct SlaThresholdFactory<'a> {
    db: &'a DatabaseConnection,
    threshold_type: i32,
    allowed_seconds: i32,
}

impl<'a> SlaThresholdFactory<'a> {
    /// Creates a new SlaThresholdFactory.
    ///
    /// Defaults:
    /// - allowed_seconds: `3600` (60 minutes)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `threshold_type` - Threshold type id the allowance applies to
    pub fn new(db: &'a DatabaseConnection, threshold_type: i32) -> Self {
        Self {
            db,
            threshold_type,
            allowed_seconds: 3600,
        }
    }

    /// Sets the allowed duration in seconds.
    pub fn allowed_seconds(mut self, allowed_seconds: i32) -> Self {
        self.allowed_seconds = allowed_seconds;
        self
    }

    /// Builds and inserts the SLA threshold entity into the database.
    pub async fn build(self) -> Result<entity::sla_threshold::Model, DbErr> {
        entity::sla_threshold::ActiveModel {
            id: ActiveValue::NotSet,
            threshold_type: ActiveValue::Set(self.threshold_type),
            allowed_seconds: ActiveValue::Set(self.allowed_seconds),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an SLA threshold with the default 60-minute allowance.
pub async fn create_sla_threshold(
    db: &DatabaseConnection,
    threshold_type: i32,
) -> Result<entity::sla_threshold::Model, DbErr> {
    SlaThresholdFactory::new(db, threshold_type).build().await
}
