//! Database queries for projects.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::entity::project::{self, ActiveModel, Entity as Project};
use crate::error::{AppError, AppResult};
use crate::models::project::check_date_range;
use crate::models::{NewProject, ProjectPatch};

use super::DbPool;

impl DbPool {
    /// Insert a new project.
    pub async fn create_project(&self, new: NewProject) -> AppResult<project::Model> {
        let model = ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            status: Set(new.status),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to insert project", e))?;

        info!(project_id = result.project_id, "Project created");
        Ok(result)
    }

    /// List projects, newest first.
    pub async fn list_projects(&self) -> AppResult<Vec<project::Model>> {
        Project::find()
            .order_by_desc(project::Column::CreatedAt)
            .order_by_desc(project::Column::ProjectId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list projects", e))
    }

    /// Get a project by ID.
    pub async fn get_project(&self, id: i32) -> AppResult<Option<project::Model>> {
        Project::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get project", e))
    }

    /// Apply a partial update to a project.
    pub async fn update_project(&self, id: i32, patch: ProjectPatch) -> AppResult<project::Model> {
        let current = self
            .get_project(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))?;

        if patch.is_empty() {
            return Ok(current);
        }

        let start = patch.start_date.unwrap_or(current.start_date);
        let end = patch.end_date.unwrap_or(current.end_date);
        check_date_range(start, end)?;

        let mut active: ActiveModel = current.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(start_date) = patch.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = patch.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(status) = patch.status {
            active.status = Set(status);
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to update project", e))?;

        info!(project_id = id, "Project updated");
        Ok(result)
    }

    /// Delete a project. Sub-projects, suites, cases, executions and bugs go
    /// with it through the schema's cascading foreign keys.
    pub async fn delete_project(&self, id: i32) -> AppResult<()> {
        let result = Project::delete_by_id(id)
            .exec(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to delete project", e))?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Project {}", id)));
        }

        info!(project_id = id, "Project deleted");
        Ok(())
    }

    /// Whether any project exists (used to decide on demo seeding).
    pub async fn has_projects(&self) -> AppResult<bool> {
        use sea_orm::PaginatorTrait;

        let count = Project::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to count projects", e))?;

        Ok(count > 0)
    }
}
