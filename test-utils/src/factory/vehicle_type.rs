//! Vehicle type factory for creating test vehicle type entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test vehicle types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle_type::VehicleTypeFactory;
///
/// let vehicle_type = VehicleTypeFactory::new(&db)
///     .name("Two Wheeler")
///     .build()
///     .await?;
/// ```
pub struct VehicleTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    is_active: bool,
    deleted: bool,
}

impl<'a> VehicleTypeFactory<'a> {
    /// Creates a new VehicleTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle Type {id}"` where id is auto-incremented
    /// - is_active: `true`
    /// - not soft-deleted
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle Type {}", id),
            is_active: true,
            deleted: false,
        }
    }

    /// Sets the vehicle type name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the row inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Marks the row soft-deleted (`deleted_at` set to now).
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the vehicle type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle_type::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle_type::Model, DbErr> {
        entity::vehicle_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
            deleted_at: ActiveValue::Set(self.deleted.then(Utc::now)),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle type with default values.
///
/// Shorthand for `VehicleTypeFactory::new(db).build().await`.
pub async fn create_vehicle_type(
    db: &DatabaseConnection,
) -> Result<entity::vehicle_type::Model, DbErr> {
    VehicleTypeFactory::new(db).build().await
}
