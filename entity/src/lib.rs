//! SeaORM entities for the durable tables: the reference ("master") lookup
//! domains resolved during report materialization, and the SLA threshold
//! configuration.

pub mod case_status;
pub mod district;
pub mod reason;
pub mod sla_threshold;
pub mod taluk;
pub mod vehicle_make;
pub mod vehicle_type;

pub mod prelude {
    pub use super::case_status::Entity as CaseStatus;
    pub use super::district::Entity as District;
    pub use super::reason::Entity as Reason;
    pub use super::sla_threshold::Entity as SlaThreshold;
    pub use super::taluk::Entity as Taluk;
    pub use super::vehicle_make::Entity as VehicleMake;
    pub use super::vehicle_type::Entity as VehicleType;
}
