use super::*;

/// Tests fetching allowances for several threshold types in one query.
///
/// Expected: map keyed by threshold type with each configured allowance
#[tokio::test]
async fn fetches_configured_thresholds() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_table(SlaThreshold).build().await.unwrap();
    let db = test.database().await.unwrap();

    SlaThresholdFactory::new(db, 1).allowed_seconds(3600).build().await?;
    SlaThresholdFactory::new(db, 2).allowed_seconds(7200).build().await?;

    let allowed = SlaThresholdRepository::new(db)
        .get_allowed_seconds(&[1, 2])
        .await?;

    assert_eq!(allowed.get(&1), Some(&3600));
    assert_eq!(allowed.get(&2), Some(&7200));

    Ok(())
}

/// Tests that unconfigured threshold types are absent from the result.
#[tokio::test]
async fn unconfigured_types_are_absent() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_table(SlaThreshold).build().await.unwrap();
    let db = test.database().await.unwrap();

    SlaThresholdFactory::new(db, 1).build().await?;

    let allowed = SlaThresholdRepository::new(db)
        .get_allowed_seconds(&[1, 2])
        .await?;

    assert_eq!(allowed.len(), 1);
    assert!(!allowed.contains_key(&2));

    Ok(())
}

/// Tests that an empty type list fetches nothing.
#[tokio::test]
async fn empty_type_list_fetches_nothing() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_table(SlaThreshold).build().await.unwrap();
    let db = test.database().await.unwrap();

    SlaThresholdFactory::new(db, 1).build().await?;

    let allowed = SlaThresholdRepository::new(db).get_allowed_seconds(&[]).await?;

    assert!(allowed.is_empty());

    Ok(())
}
