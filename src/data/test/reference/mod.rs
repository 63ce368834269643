use super::*;
use crate::data::reference::{
    ReferenceDomainRegistry, ReferenceSource, TalukSource, VehicleMakeSource, VehicleTypeSource,
};
use sea_orm::DbErr;
use serde_json::json;

mod fetch_by_ids;
mod fetch_relation_value;
mod registry;
