use super::*;
use test_utils::factory::helpers::{create_make_with_type, create_taluk_with_district};

/// Tests the one-hop join from a vehicle make to its type's name.
#[tokio::test]
async fn resolves_make_vehicle_type_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (vehicle_type, make) = create_make_with_type(db).await?;

    let value = VehicleMakeSource
        .fetch_relation_value(db, make.id, "vehicleType", "name")
        .await?;

    assert_eq!(value, Some(vehicle_type.name));

    Ok(())
}

/// Tests the one-hop join from a taluk to its district's name.
#[tokio::test]
async fn resolves_taluk_district_name() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (district, taluk) = create_taluk_with_district(db).await?;

    let value = TalukSource
        .fetch_relation_value(db, taluk.id, "district", "name")
        .await?;

    assert_eq!(value, Some(district.name));

    Ok(())
}

/// Tests that unknown relation names and fields resolve to None.
#[tokio::test]
async fn unknown_relation_or_field_is_none() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let (_, taluk) = create_taluk_with_district(db).await?;

    let by_relation = TalukSource
        .fetch_relation_value(db, taluk.id, "region", "name")
        .await?;
    let by_field = TalukSource
        .fetch_relation_value(db, taluk.id, "district", "population")
        .await?;

    assert_eq!(by_relation, None);
    assert_eq!(by_field, None);

    Ok(())
}

/// Tests that a missing base record resolves to None.
#[tokio::test]
async fn missing_base_record_is_none() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let value = TalukSource
        .fetch_relation_value(db, 404, "district", "name")
        .await?;

    assert_eq!(value, None);

    Ok(())
}

/// Tests that the default implementation resolves nothing for domains with
/// no relation.
#[tokio::test]
async fn relationless_domains_resolve_none() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_reference_tables().build().await.unwrap();
    let db = test.database().await.unwrap();

    let value = VehicleTypeSource
        .fetch_relation_value(db, 1, "anything", "name")
        .await?;

    assert_eq!(value, None);

    Ok(())
}
