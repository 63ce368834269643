//! Static catalog of report columns.
//!
//! Every column a caller may request is declared here once, keyed by numeric
//! id. Requests select a subset of ids; unknown ids are ignored. The catalog
//! replaces the positional column descriptors of earlier incarnations of
//! this report with explicit specs.

use crate::{
    data::reference,
    model::report::{FieldType, ReportColumnSpec, TargetDomain},
};

pub const CASE_NUMBER: i32 = 1;
pub const CREATED_ON: i32 = 2;
pub const SCHEDULED_DATE: i32 = 3;
pub const URGENT: i32 = 4;
pub const VEHICLE_TYPE: i32 = 5;
pub const VEHICLE_MAKE: i32 = 6;
pub const VEHICLE_MAKE_CATEGORY: i32 = 7;
pub const CASE_STATUS: i32 = 8;
pub const REASON: i32 = 9;
pub const TALUK: i32 = 10;
pub const TALUK_DISTRICT: i32 = 11;
pub const AGENT_NAME: i32 = 12;
pub const DEALER_NAME: i32 = 13;
pub const CASE_REFERENCE: i32 = 14;
pub const AGENT_PICKUP_DELAY: i32 = 15;
pub const AGENT_SLA_STATUS: i32 = 16;
pub const DEALER_PAYMENT_DELAY: i32 = 17;
pub const DEALER_SLA_STATUS: i32 = 18;

/// The full column catalog. SLA status columns are plain pass-through specs
/// over the fields the SLA classifier writes before materialization.
pub static REPORT_COLUMNS: &[ReportColumnSpec] = &[
    ReportColumnSpec::unmapped(CASE_NUMBER, "Case Number", "caseNumber", FieldType::Raw),
    ReportColumnSpec::unmapped(CREATED_ON, "Created On", "createdAt", FieldType::DateTime),
    ReportColumnSpec::unmapped(
        SCHEDULED_DATE,
        "Scheduled Date",
        "scheduledDate",
        FieldType::Date,
    ),
    ReportColumnSpec::unmapped(URGENT, "Urgent", "isUrgent", FieldType::Boolean),
    ReportColumnSpec::mapped(
        VEHICLE_TYPE,
        "Vehicle Type",
        "vehicleTypeId",
        TargetDomain::Reference,
        reference::VEHICLE_TYPES,
        "name",
    ),
    ReportColumnSpec::mapped(
        VEHICLE_MAKE,
        "Vehicle Make",
        "vehicleMakeId",
        TargetDomain::Reference,
        reference::VEHICLE_MAKES,
        "name",
    ),
    ReportColumnSpec::related(
        VEHICLE_MAKE_CATEGORY,
        "Vehicle Category",
        "vehicleMakeId",
        reference::VEHICLE_MAKES,
        "vehicleType",
        "name",
    ),
    ReportColumnSpec::mapped(
        CASE_STATUS,
        "Case Status",
        "caseStatusId",
        TargetDomain::Reference,
        reference::CASE_STATUSES,
        "name",
    ),
    ReportColumnSpec::mapped(
        REASON,
        "Reason",
        "reasonId",
        TargetDomain::Reference,
        reference::REASONS,
        "name",
    ),
    ReportColumnSpec::mapped(
        TALUK,
        "Taluk",
        "talukId",
        TargetDomain::Reference,
        reference::TALUKS,
        "name",
    ),
    ReportColumnSpec::related(
        TALUK_DISTRICT,
        "District",
        "talukId",
        reference::TALUKS,
        "district",
        "name",
    ),
    ReportColumnSpec::mapped(
        AGENT_NAME,
        "Agent Name",
        "agentId",
        TargetDomain::User,
        "agents",
        "name",
    ),
    ReportColumnSpec::mapped(
        DEALER_NAME,
        "Dealer Name",
        "dealerId",
        TargetDomain::User,
        "dealers",
        "name",
    ),
    ReportColumnSpec::mapped(
        CASE_REFERENCE,
        "Case Reference",
        "caseId",
        TargetDomain::Case,
        "cases",
        "referenceNumber",
    ),
    ReportColumnSpec::unmapped(
        AGENT_PICKUP_DELAY,
        "Agent Pickup Delay",
        "agentPickupDelay",
        FieldType::Raw,
    ),
    ReportColumnSpec::unmapped(
        AGENT_SLA_STATUS,
        "Agent SLA Status",
        "Agent SLA Status",
        FieldType::Raw,
    ),
    ReportColumnSpec::unmapped(
        DEALER_PAYMENT_DELAY,
        "Dealer Payment Delay",
        "dealerPaymentDelay",
        FieldType::Raw,
    ),
    ReportColumnSpec::unmapped(
        DEALER_SLA_STATUS,
        "Dealer SLA Status",
        "Dealer SLA Status",
        FieldType::Raw,
    ),
];

/// Looks up one catalog column by id.
pub fn find(id: i32) -> Option<&'static ReportColumnSpec> {
    REPORT_COLUMNS.iter().find(|spec| spec.id == id)
}

/// Selects catalog columns for the requested ids, preserving requested
/// order. Unknown ids are skipped.
pub fn select(ids: &[i32]) -> Vec<&'static ReportColumnSpec> {
    ids.iter().filter_map(|id| find(*id)).collect()
}
