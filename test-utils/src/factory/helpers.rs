//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a vehicle make together with its vehicle type dependency.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((vehicle_type, vehicle_make))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_make_with_type(
    db: &DatabaseConnection,
) -> Result<(entity::vehicle_type::Model, entity::vehicle_make::Model), DbErr> {
    let vehicle_type = crate::factory::vehicle_type::create_vehicle_type(db).await?;
    let vehicle_make =
        crate::factory::vehicle_make::create_vehicle_make(db, vehicle_type.id).await?;

    Ok((vehicle_type, vehicle_make))
}

/// Creates a taluk together with its district dependency.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((district, taluk))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_taluk_with_district(
    db: &DatabaseConnection,
) -> Result<(entity::district::Model, entity::taluk::Model), DbErr> {
    let district = crate::factory::district::create_district(db).await?;
    let taluk = crate::factory::taluk::create_taluk(db, district.id).await?;

    Ok((district, taluk))
}
