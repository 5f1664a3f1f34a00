//! Test suite DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::test_suite;
use crate::error::AppResult;

use super::{optional_text, required_id, required_text};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTestSuiteRequest {
    pub project_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTestSuite {
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl CreateTestSuiteRequest {
    pub fn validate(self) -> AppResult<NewTestSuite> {
        Ok(NewTestSuite {
            name: required_text(self.name, "name")?,
            project_id: required_id(self.project_id, "project_id")?,
            description: optional_text(self.description),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTestSuitesQuery {
    /// Only suites of this project.
    pub project_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestSuiteResponse {
    pub test_suite_id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<test_suite::Model> for TestSuiteResponse {
    fn from(m: test_suite::Model) -> Self {
        Self {
            test_suite_id: m.test_suite_id,
            project_id: m.project_id,
            name: m.name,
            description: m.description,
            created_date: m.created_date,
            created_at: m.created_at,
        }
    }
}
