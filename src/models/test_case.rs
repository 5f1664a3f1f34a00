//! Test case DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::test_case;
use crate::error::AppResult;

use super::{optional_text, parse_enum, required_id, required_text};

/// Test case priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCasePriority {
    High,
    Medium,
    Low,
}

impl TestCasePriority {
    pub const ALL: [TestCasePriority; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for TestCasePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateTestCaseRequest {
    pub test_suite_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub preconditions: Option<String>,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    /// High, Medium or Low. Defaults to "Medium".
    pub priority: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTestCase {
    pub test_suite_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub preconditions: Option<String>,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    pub priority: TestCasePriority,
}

impl CreateTestCaseRequest {
    pub fn validate(self) -> AppResult<NewTestCase> {
        let name = required_text(self.name, "name")?;
        let test_suite_id = required_id(self.test_suite_id, "test_suite_id")?;
        let priority = match optional_text(self.priority) {
            Some(p) => {
                let allowed: Vec<_> = TestCasePriority::ALL.iter().map(|p| p.as_str()).collect();
                parse_enum(&p, "priority", TestCasePriority::parse, &allowed)?
            }
            None => TestCasePriority::Medium,
        };

        Ok(NewTestCase {
            test_suite_id,
            name,
            description: optional_text(self.description),
            preconditions: optional_text(self.preconditions),
            steps: optional_text(self.steps),
            expected_result: optional_text(self.expected_result),
            priority,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTestCasesQuery {
    /// Only cases in this suite.
    pub test_suite_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TestCaseResponse {
    pub test_case_id: i32,
    pub test_suite_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub preconditions: Option<String>,
    pub steps: Option<String>,
    pub expected_result: Option<String>,
    pub priority: String,
    pub created_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<test_case::Model> for TestCaseResponse {
    fn from(m: test_case::Model) -> Self {
        Self {
            test_case_id: m.test_case_id,
            test_suite_id: m.test_suite_id,
            name: m.name,
            description: m.description,
            preconditions: m.preconditions,
            steps: m.steps,
            expected_result: m.expected_result,
            priority: m.priority,
            created_date: m.created_date,
            created_at: m.created_at,
        }
    }
}
