//! Migration: Create test_cases table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TABLE test_cases (
                    test_case_id SERIAL PRIMARY KEY,
                    test_suite_id INTEGER NOT NULL REFERENCES test_suites(test_suite_id) ON DELETE CASCADE,
                    name VARCHAR(200) NOT NULL,
                    description TEXT,
                    preconditions TEXT,
                    steps TEXT,
                    expected_result TEXT,
                    priority VARCHAR(20) NOT NULL DEFAULT 'Medium'
                        CHECK (priority IN ('High', 'Medium', 'Low')),
                    created_date DATE NOT NULL DEFAULT CURRENT_DATE,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                CREATE INDEX idx_test_cases_test_suite_id ON test_cases(test_suite_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS test_cases CASCADE;")
            .await?;

        Ok(())
    }
}
