//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_projects;
mod m20250301_000002_create_sub_projects;
mod m20250301_000003_create_testers;
mod m20250301_000004_create_test_suites;
mod m20250301_000005_create_test_cases;
mod m20250301_000006_create_test_executions;
mod m20250301_000007_create_bugs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_projects::Migration),
            Box::new(m20250301_000002_create_sub_projects::Migration),
            Box::new(m20250301_000003_create_testers::Migration),
            Box::new(m20250301_000004_create_test_suites::Migration),
            Box::new(m20250301_000005_create_test_cases::Migration),
            Box::new(m20250301_000006_create_test_executions::Migration),
            Box::new(m20250301_000007_create_bugs::Migration),
        ]
    }
}
