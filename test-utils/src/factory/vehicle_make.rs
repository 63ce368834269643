//! Vehicle make factory for creating test vehicle make entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test vehicle makes with customizable fields.
///
/// The owning vehicle type must exist first; use
/// `helpers::create_make_with_type` when the test doesn't care about the
/// type itself.
pub struct VehicleMakeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vehicle_type_id: i32,
    is_active: bool,
    deleted: bool,
}

impl<'a> VehicleMakeFactory<'a> {
    /// Creates a new VehicleMakeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle Make {id}"` where id is auto-incremented
    /// - is_active: `true`
    /// - not soft-deleted
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `vehicle_type_id` - Owning vehicle type
    pub fn new(db: &'a DatabaseConnection, vehicle_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle Make {}", id),
            vehicle_type_id,
            is_active: true,
            deleted: false,
        }
    }

    /// Sets the vehicle make name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the row soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the vehicle make entity into the database.
    pub async fn build(self) -> Result<entity::vehicle_make::Model, DbErr> {
        entity::vehicle_make::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            vehicle_type_id: ActiveValue::Set(self.vehicle_type_id),
            is_active: ActiveValue::Set(self.is_active),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle make with default values under the given vehicle type.
pub async fn create_vehicle_make(
    db: &DatabaseConnection,
    vehicle_type_id: i32,
) -> Result<entity::vehicle_make::Model, DbErr> {
    VehicleMakeFactory::new(db, vehicle_type_id).build().await
}
