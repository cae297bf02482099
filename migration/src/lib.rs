pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20250301_000001_dynamic_qr_codes;
mod m20250301_000002_qr_scans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_dynamic_qr_codes::Migration),
            Box::new(m20250301_000002_qr_scans::Migration),
        ]
    }
}
