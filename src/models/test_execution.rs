//! Test execution DTOs. Executions are an append-only log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::test_execution;
use crate::error::AppResult;

use super::{optional_text, parse_enum, required_id, required_text};

/// Outcome of running a test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Pass,
    Fail,
    Blocked,
    Skipped,
}

impl ExecutionStatus {
    pub const ALL: [ExecutionStatus; 4] = [Self::Pass, Self::Fail, Self::Blocked, Self::Skipped];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::Blocked => "Blocked",
            Self::Skipped => "Skipped",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == s)
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateExecutionRequest {
    pub test_case_id: Option<i32>,
    pub tester_id: Option<i32>,
    /// Pass, Fail, Blocked or Skipped.
    pub status: Option<String>,
    pub notes: Option<String>,
    /// Defaults to the time of recording.
    pub execution_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExecution {
    pub test_case_id: i32,
    pub tester_id: i32,
    pub status: ExecutionStatus,
    pub notes: Option<String>,
    pub execution_date: Option<DateTime<Utc>>,
}

impl CreateExecutionRequest {
    pub fn validate(self) -> AppResult<NewExecution> {
        let test_case_id = required_id(self.test_case_id, "test_case_id")?;
        let tester_id = required_id(self.tester_id, "tester_id")?;
        let status = required_text(self.status, "status")?;
        let allowed: Vec<_> = ExecutionStatus::ALL.iter().map(|s| s.as_str()).collect();
        let status = parse_enum(&status, "status", ExecutionStatus::parse, &allowed)?;

        Ok(NewExecution {
            test_case_id,
            tester_id,
            status,
            notes: optional_text(self.notes),
            execution_date: self.execution_date,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListExecutionsQuery {
    pub test_case_id: Option<i32>,
    pub tester_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExecutionResponse {
    pub execution_id: i32,
    pub test_case_id: i32,
    pub tester_id: i32,
    pub execution_date: DateTime<Utc>,
    pub status: String,
    pub notes: Option<String>,
}

impl From<test_execution::Model> for ExecutionResponse {
    fn from(m: test_execution::Model) -> Self {
        Self {
            execution_id: m.execution_id,
            test_case_id: m.test_case_id,
            tester_id: m.tester_id,
            execution_date: m.execution_date,
            status: m.status,
            notes: m.notes,
        }
    }
}
