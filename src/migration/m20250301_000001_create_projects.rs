//! Migration: Create projects table.
//!
//! Projects own sub-projects, test suites and bugs; deleting one cascades.

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
                CREATE TABLE projects (
                    project_id SERIAL PRIMARY KEY,
                    name VARCHAR(200) NOT NULL,
                    description TEXT,
                    start_date DATE,
                    end_date DATE,
                    status VARCHAR(50) NOT NULL DEFAULT 'Active',
                    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                );

                -- Listing is newest first
                CREATE INDEX idx_projects_created_at ON projects(created_at DESC);

                -- Reports only look at active projects
                CREATE INDEX idx_projects_status ON projects(status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS projects CASCADE;")
            .await?;

        Ok(())
    }
}
