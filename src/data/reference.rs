//! Reference ("master") domain sources and their registry.
//!
//! Each lookup table the report engine can resolve against is wired as one
//! `ReferenceSource` implementation, registered by domain name at process
//! start. This replaces string-keyed dynamic table dispatch with a fixed
//! table of capabilities: a domain either exists in the registry or the
//! engine treats the column as unresolvable and moves on.
//!
//! All fetches here read soft-deleted rows on purpose. Reports cover
//! historical data, and a case that references a since-deleted vehicle make
//! must still render that make's name.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::report::ReferenceRecord;

/// Domain names as requested by report column specs.
pub const VEHICLE_TYPES: &str = "vehicleTypes";
pub const VEHICLE_MAKES: &str = "vehicleMakes";
pub const CASE_STATUSES: &str = "caseStatuses";
pub const REASONS: &str = "reasons";
pub const DISTRICTS: &str = "districts";
pub const TALUKS: &str = "taluks";

/// Capability interface of one reference domain.
///
/// `fetch_by_ids` backs the reference cache: one bulk query for exactly the
/// ids a report run needs, never a full-table scan. `fetch_relation_value`
/// backs the rare one-hop relation columns and is overridden only by domains
/// that actually carry a relation; the default resolves nothing. Both
/// fetches include soft-deleted rows; historical reports keep resolving
/// against since-deleted records.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Fetches the records for exactly the given ids, keyed by id. Ids with
    /// no row are simply absent from the result.
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr>;

    /// Fetches the base record for `id` together with its related record
    /// (eager one-hop join) and reads `field` from the related side. Returns
    /// `None` when the base record, the related record, the relation name
    /// or the field is unknown.
    async fn fetch_relation_value(
        &self,
        _db: &DatabaseConnection,
        _id: i32,
        _relation: &str,
        _field: &str,
    ) -> Result<Option<String>, DbErr> {
        Ok(None)
    }
}

/// Static wiring of domain name to reference source, built once at startup
/// and shared read-only across requests.
pub struct ReferenceDomainRegistry {
    domains: HashMap<&'static str, Box<dyn ReferenceSource>>,
}

impl ReferenceDomainRegistry {
    /// Builds the registry with all wired domains.
    pub fn new() -> Self {
        let mut registry = Self {
            domains: HashMap::new(),
        };
        registry.register(VEHICLE_TYPES, Box::new(VehicleTypeSource));
        registry.register(VEHICLE_MAKES, Box::new(VehicleMakeSource));
        registry.register(CASE_STATUSES, Box::new(CaseStatusSource));
        registry.register(REASONS, Box::new(ReasonSource));
        registry.register(DISTRICTS, Box::new(DistrictSource));
        registry.register(TALUKS, Box::new(TalukSource));
        registry
    }

    /// Registers (or replaces) a domain source.
    pub fn register(&mut self, name: &'static str, source: Box<dyn ReferenceSource>) {
        self.domains.insert(name, source);
    }

    /// Looks up a domain source by name.
    pub fn get(&self, name: &str) -> Option<&dyn ReferenceSource> {
        self.domains.get(name).map(|source| source.as_ref())
    }
}

impl Default for ReferenceDomainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub struct VehicleTypeSource;

#[async_trait]
impl ReferenceSource for VehicleTypeSource {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        let models = entity::prelude::VehicleType::find()
            .filter(entity::vehicle_type::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut record = ReferenceRecord::new();
                record.insert("id".to_string(), m.id.into());
                record.insert("name".to_string(), m.name.into());
                (m.id, record)
            })
            .collect())
    }
}

pub struct VehicleMakeSource;

#[async_trait]
impl ReferenceSource for VehicleMakeSource {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        let models = entity::prelude::VehicleMake::find()
            .filter(entity::vehicle_make::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut record = ReferenceRecord::new();
                record.insert("id".to_string(), m.id.into());
                record.insert("name".to_string(), m.name.into());
                record.insert("vehicleTypeId".to_string(), m.vehicle_type_id.into());
                (m.id, record)
            })
            .collect())
    }

    /// Resolves the display field of the make's vehicle type in a single
    /// joined query.
    async fn fetch_relation_value(
        &self,
        db: &DatabaseConnection,
        id: i32,
        relation: &str,
        field: &str,
    ) -> Result<Option<String>, DbErr> {
        if relation != "vehicleType" {
            return Ok(None);
        }

        let result = entity::prelude::VehicleMake::find_by_id(id)
            .find_also_related(entity::prelude::VehicleType)
            .one(db)
            .await?;

        let Some((_, Some(vehicle_type))) = result else {
            return Ok(None);
        };

        Ok(match field {
            "name" => Some(vehicle_type.name),
            _ => None,
        })
    }
}

pub struct CaseStatusSource;

#[async_trait]
impl ReferenceSource for CaseStatusSource {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        let models = entity::prelude::CaseStatus::find()
            .filter(entity::case_status::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut record = ReferenceRecord::new();
                record.insert("id".to_string(), m.id.into());
                record.insert("name".to_string(), m.name.into());
                (m.id, record)
            })
            .collect())
    }
}

pub struct ReasonSource;

#[async_trait]
impl ReferenceSource for ReasonSource {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        let models = entity::prelude::Reason::find()
            .filter(entity::reason::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut record = ReferenceRecord::new();
                record.insert("id".to_string(), m.id.into());
                record.insert("name".to_string(), m.name.into());
                (m.id, record)
            })
            .collect())
    }
}

pub struct DistrictSource;

#[async_trait]
impl ReferenceSource for DistrictSource {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        let models = entity::prelude::District::find()
            .filter(entity::district::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut record = ReferenceRecord::new();
                record.insert("id".to_string(), m.id.into());
                record.insert("name".to_string(), m.name.into());
                (m.id, record)
            })
            .collect())
    }
}

pub struct TalukSource;

#[async_trait]
impl ReferenceSource for TalukSource {
    async fn fetch_by_ids(
        &self,
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, ReferenceRecord>, DbErr> {
        let models = entity::prelude::Taluk::find()
            .filter(entity::taluk::Column::Id.is_in(ids.iter().copied()))
            .all(db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let mut record = ReferenceRecord::new();
                record.insert("id".to_string(), m.id.into());
                record.insert("name".to_string(), m.name.into());
                record.insert("districtId".to_string(), m.district_id.into());
                (m.id, record)
            })
            .collect())
    }

    /// Resolves the display field of the taluk's district in a single joined
    /// query.
    async fn fetch_relation_value(
        &self,
        db: &DatabaseConnection,
        id: i32,
        relation: &str,
        field: &str,
    ) -> Result<Option<String>, DbErr> {
        if relation != "district" {
            return Ok(None);
        }

        let result = entity::prelude::Taluk::find_by_id(id)
            .find_also_related(entity::prelude::District)
            .one(db)
            .await?;

        let Some((_, Some(district))) = result else {
            return Ok(None);
        };

        Ok(match field {
            "name" => Some(district.name),
            _ => None,
        })
    }
}
