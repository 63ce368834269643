//! Factories for creating test entities with sensible defaults.
//!
//! Each factory provides a builder pattern over one entity, auto-generating
//! unique names from a shared counter so tests can create records without
//! boilerplate. Reference-domain factories support marking rows soft-deleted
//! to exercise the report engine's deleted-row resolution.

pub mod case_status;
pub mod district;
pub mod helpers;
pub mod reason;
pub mod sla_threshold;
pub mod taluk;
pub mod vehicle_make;
pub mod vehicle_type;
