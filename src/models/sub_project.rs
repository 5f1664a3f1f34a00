//! Sub-project DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::sub_project;
use crate::error::AppResult;

use super::{optional_text, required_id, required_text};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateSubProjectRequest {
    pub project_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSubProject {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl CreateSubProjectRequest {
    pub fn validate(self) -> AppResult<NewSubProject> {
        Ok(NewSubProject {
            name: required_text(self.name, "name")?,
            project_id: required_id(self.project_id, "project_id")?,
            description: optional_text(self.description),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSubProjectsQuery {
    /// Only sub-projects of this project.
    pub project_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubProjectResponse {
    pub sub_project_id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<sub_project::Model> for SubProjectResponse {
    fn from(m: sub_project::Model) -> Self {
        Self {
            sub_project_id: m.sub_project_id,
            project_id: m.project_id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
        }
    }
}
