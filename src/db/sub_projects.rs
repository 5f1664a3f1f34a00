//! Database queries for sub-projects.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use crate::entity::sub_project::{self, ActiveModel, Entity as SubProject};
use crate::error::{AppError, AppResult};
use crate::models::NewSubProject;

use super::DbPool;

impl DbPool {
    /// Insert a new sub-project under an existing project.
    pub async fn create_sub_project(&self, new: NewSubProject) -> AppResult<sub_project::Model> {
        let model = ActiveModel {
            project_id: Set(new.project_id),
            name: Set(new.name),
            description: Set(new.description),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to insert sub-project", e))?;

        info!(
            sub_project_id = result.sub_project_id,
            project_id = result.project_id,
            "Sub-project created"
        );
        Ok(result)
    }

    /// List sub-projects, optionally restricted to one project.
    pub async fn list_sub_projects(
        &self,
        project_id: Option<i32>,
    ) -> AppResult<Vec<sub_project::Model>> {
        let mut select = SubProject::find();
        if let Some(project_id) = project_id {
            select = select.filter(sub_project::Column::ProjectId.eq(project_id));
        }

        select
            .order_by_asc(sub_project::Column::SubProjectId)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to list sub-projects", e))
    }

    /// Get a sub-project by ID.
    pub async fn get_sub_project(&self, id: i32) -> AppResult<Option<sub_project::Model>> {
        SubProject::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::from_db("Failed to get sub-project", e))
    }
}
