//! Project DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::project;
use crate::error::{AppError, AppResult};

use super::{deserialize_some, optional_text, required_text};

/// Status given to projects created without one. Only projects in this
/// status appear in the projects-with-bugs report.
pub const ACTIVE_PROJECT_STATUS: &str = "Active";

/// Request body for `POST /api/projects`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// ISO date (YYYY-MM-DD).
    pub start_date: Option<NaiveDate>,
    /// ISO date (YYYY-MM-DD), not before `start_date`.
    pub end_date: Option<NaiveDate>,
    /// Free-form label such as Active, Completed or On Hold. Defaults to "Active".
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

impl CreateProjectRequest {
    pub fn validate(self) -> AppResult<NewProject> {
        let name = required_text(self.name, "name")?;
        check_date_range(self.start_date, self.end_date)?;

        Ok(NewProject {
            name,
            description: optional_text(self.description),
            start_date: self.start_date,
            end_date: self.end_date,
            status: optional_text(self.status)
                .unwrap_or_else(|| ACTIVE_PROJECT_STATUS.to_string()),
        })
    }
}

/// Request body for `PUT /api/projects/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, format = Date)]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<Option<NaiveDate>>,
    pub status: Option<String>,
}

/// A validated partial project update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
    pub status: Option<String>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl UpdateProjectRequest {
    pub fn validate(self) -> AppResult<ProjectPatch> {
        let name = match self.name {
            Some(n) => Some(required_text(Some(n), "name")?),
            None => None,
        };
        let status = match self.status {
            Some(s) => Some(required_text(Some(s), "status")?),
            None => None,
        };

        Ok(ProjectPatch {
            name,
            description: self.description.map(optional_text),
            start_date: self.start_date,
            end_date: self.end_date,
            status,
        })
    }
}

/// Reject a project that would end before it starts.
pub fn check_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => Err(AppError::InvalidInput(
            "end_date must not be before start_date".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Project as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<project::Model> for ProjectResponse {
    fn from(m: project::Model) -> Self {
        Self {
            project_id: m.project_id,
            name: m.name,
            description: m.description,
            start_date: m.start_date,
            end_date: m.end_date,
            status: m.status,
            created_at: m.created_at,
        }
    }
}
