use super::*;
use test_utils::factory::helpers::create_make_with_type;
use test_utils::factory::vehicle_type::{create_vehicle_type, VehicleTypeFactory};

/// Tests fetching reference records for exactly the requested ids.
///
/// Expected: requested rows keyed by id, unrequested rows absent
#[tokio::test]
async fn fetches_only_requested_ids() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let wanted = VehicleTypeFactory::new(db).name("Two Wheeler").build().await?;
    let unwanted = create_vehicle_type(db).await?;

    let records = VehicleTypeSource.fetch_by_ids(db, &[wanted.id]).await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[&wanted.id]["name"], json!("Two Wheeler"));
    assert!(!records.contains_key(&unwanted.id));

    Ok(())
}

/// Tests that ids with no row are simply absent rather than an error.
#[tokio::test]
async fn missing_ids_are_absent() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let records = VehicleTypeSource.fetch_by_ids(db, &[404, 405]).await?;

    assert!(records.is_empty());

    Ok(())
}

/// Tests that soft-deleted rows are included in reference fetches.
#[tokio::test]
async fn includes_soft_deleted_rows() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let deleted = VehicleTypeFactory::new(db).deleted().build().await?;

    let records = VehicleTypeSource.fetch_by_ids(db, &[deleted.id]).await?;

    assert!(records.contains_key(&deleted.id));

    Ok(())
}

/// Tests that records expose the foreign key of their owning row, which the
/// relation columns depend on.
#[tokio::test]
async fn make_records_carry_their_type_id() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (vehicle_type, make) = create_make_with_type(db).await?;

    let records = VehicleMakeSource.fetch_by_ids(db, &[make.id]).await?;

    assert_eq!(records[&make.id]["vehicleTypeId"], json!(vehicle_type.id));

    Ok(())
}
