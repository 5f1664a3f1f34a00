//! Migration: Create test_executions table.
//!
//! Append-only log of test case runs.

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
                CREATE TABLE test_executions (
                    execution_id SERIAL PRIMARY KEY,
                    test_case_id INTEGER NOT NULL REFERENCES test_cases(test_case_id) ON DELETE CASCADE,
                    tester_id INTEGER NOT NULL REFERENCES testers(tester_id) ON DELETE CASCADE,
                    execution_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    status VARCHAR(50) NOT NULL,
                    notes TEXT
                );

                CREATE INDEX idx_test_executions_test_case_id ON test_executions(test_case_id);
                CREATE INDEX idx_test_executions_tester_id ON test_executions(tester_id);

                -- Windowed report counts
                CREATE INDEX idx_test_executions_execution_date ON test_executions(execution_date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS test_executions CASCADE;")
            .await?;

        Ok(())
    }
}
