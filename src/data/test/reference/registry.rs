use super::*;
use crate::data::reference;

/// Tests that every wired domain name resolves to a source.
#[test]
fn wires_all_domains() {
    let registry = ReferenceDomainRegistry::new();

    for name in [
        reference::VEHICLE_TYPES,
        reference::VEHICLE_MAKES,
        reference::CASE_STATUSES,
        reference::REASONS,
        reference::DISTRICTS,
        reference::TALUKS,
    ] {
        assert!(registry.get(name).is_some(), "domain '{}' not wired", name);
    }
}

/// Tests that unknown domain names resolve to None instead of panicking.
#[test]
fn unknown_domain_is_none() {
    let registry = ReferenceDomainRegistry::new();
    assert!(registry.get("colors").is_none());
}

/// Tests that registering an existing name replaces the source.
///
/// The replacement returns canned records without touching the database;
/// no table exists, so reaching the original source would fail.
#[tokio::test]
async fn register_replaces_existing_source() -> Result<(), DbErr> {
    struct Canned;

    #[async_trait::async_trait]
    impl ReferenceSource for Canned {
        async fn fetch_by_ids(
            &self,
            _db: &sea_orm::DatabaseConnection,
            ids: &[i32],
        ) -> Result<std::collections::HashMap<i32, crate::model::report::ReferenceRecord>, DbErr>
        {
            Ok(ids
                .iter()
                .map(|id| {
                    let mut record = crate::model::report::ReferenceRecord::new();
                    record.insert("name".to_string(), "Canned".into());
                    (*id, record)
                })
                .collect())
        }
    }

    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap();

    let mut registry = ReferenceDomainRegistry::new();
    registry.register(reference::VEHICLE_TYPES, Box::new(Canned));

    let source = registry.get(reference::VEHICLE_TYPES).unwrap();
    let records = source.fetch_by_ids(db, &[7]).await?;

    assert_eq!(records[&7]["name"], serde_json::json!("Canned"));

    Ok(())
}
