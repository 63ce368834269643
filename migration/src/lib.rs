pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_vehicle_type_table;
mod m20260810_000002_create_vehicle_make_table;
mod m20260810_000003_create_case_status_table;
mod m20260810_000004_create_reason_table;
mod m20260810_000005_create_district_table;
mod m20260810_000006_create_taluk_table;
mod m20260811_000007_create_sla_threshold_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_vehicle_type_table::Migration),
            Box::new(m20260810_000002_create_vehicle_make_table::Migration),
            Box::new(m20260810_000003_create_case_status_table::Migration),
            Box::new(m20260810_000004_create_reason_table::Migration),
            Box::new(m20260810_000005_create_district_table::Migration),
            Box::new(m20260810_000006_create_taluk_table::Migration),
            Box::new(m20260811_000007_create_sla_threshold_table::Migration),
        ]
    }
}
