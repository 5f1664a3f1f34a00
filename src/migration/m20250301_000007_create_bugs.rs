//! Migration: Create bugs table.
//!
//! Discoverers are protected (RESTRICT); assignees, sub-projects and test cases
//! are detached (SET NULL) when removed.

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
                CREATE TABLE bugs (
                    bug_id SERIAL PRIMARY KEY,
                    project_id INTEGER NOT NULL REFERENCES projects(project_id) ON DELETE CASCADE,
                    sub_project_id INTEGER REFERENCES sub_projects(sub_project_id) ON DELETE SET NULL,
                    test_case_id INTEGER REFERENCES test_cases(test_case_id) ON DELETE SET NULL,
                    discovered_by INTEGER NOT NULL REFERENCES testers(tester_id) ON DELETE RESTRICT,
                    assigned_to INTEGER REFERENCES testers(tester_id) ON DELETE SET NULL,

                    name VARCHAR(200) NOT NULL,
                    description TEXT,
                    steps_to_reproduce TEXT,

                    status VARCHAR(50) NOT NULL DEFAULT 'New',
                    severity VARCHAR(20) NOT NULL
                        CHECK (severity IN ('Critical', 'High', 'Medium', 'Low')),
                    priority VARCHAR(20) NOT NULL
                        CHECK (priority IN ('P1', 'P2', 'P3', 'P4')),
                    type VARCHAR(50) NOT NULL DEFAULT 'Functional',
                    environment TEXT,

                    discovered_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                    assigned_date TIMESTAMPTZ,
                    resolution_date TIMESTAMPTZ
                );

                CREATE INDEX idx_bugs_project_id ON bugs(project_id);
                CREATE INDEX idx_bugs_sub_project_id ON bugs(sub_project_id);
                CREATE INDEX idx_bugs_discovered_by ON bugs(discovered_by);
                CREATE INDEX idx_bugs_assigned_to ON bugs(assigned_to);
                CREATE INDEX idx_bugs_status ON bugs(status);

                -- Listing and windowed chart queries
                CREATE INDEX idx_bugs_discovered_date ON bugs(discovered_date DESC);
                CREATE INDEX idx_bugs_resolution_date ON bugs(resolution_date DESC)
                    WHERE resolution_date IS NOT NULL;

                -- Unassigned bugs report
                CREATE INDEX idx_bugs_unassigned ON bugs(priority, severity)
                    WHERE assigned_to IS NULL;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS bugs CASCADE;")
            .await?;

        Ok(())
    }
}
