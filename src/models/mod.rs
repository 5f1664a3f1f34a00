//! Domain models and DTOs for the tracker API.

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

pub mod bug;
pub mod project;
pub mod report;
pub mod sub_project;
pub mod test_case;
pub mod test_execution;
pub mod test_suite;
pub mod tester;

// Re-export commonly used types
pub use bug::{
    BugPatch, BugPriority, BugResponse, BugStatus, BugType, CreateBugRequest, ListBugsQuery,
    NewBug, Severity, StatusCategory, UpdateBugRequest,
};
pub use project::{
    CreateProjectRequest, NewProject, ProjectPatch, ProjectResponse, UpdateProjectRequest,
};
pub use report::{
    BugPriorityCount, BugSeverityCount, BugStatusCount, ClosedIssuesPoint, ExecutionStatusCount,
    OpenIssuesPoint, ProjectBugSummary, RecentBug, SuiteExecutionSummary, TesterBugSummary,
    UnassignedBug,
};
pub use sub_project::{
    CreateSubProjectRequest, ListSubProjectsQuery, NewSubProject, SubProjectResponse,
};
pub use test_case::{
    CreateTestCaseRequest, ListTestCasesQuery, NewTestCase, TestCasePriority, TestCaseResponse,
};
pub use test_execution::{
    CreateExecutionRequest, ExecutionResponse, ExecutionStatus, ListExecutionsQuery, NewExecution,
};
pub use test_suite::{
    CreateTestSuiteRequest, ListTestSuitesQuery, NewTestSuite, TestSuiteResponse,
};
pub use tester::{CreateTesterRequest, NewTester, TesterResponse};

/// Default window for report queries, in days.
pub const DEFAULT_REPORT_DAYS: i32 = 7;

/// Default window for chart queries, in days.
pub const DEFAULT_CHART_DAYS: i32 = 30;

/// Largest accepted time window, in days.
pub const MAX_WINDOW_DAYS: i32 = 3650;

/// Time window query parameter shared by report and chart endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WindowQuery {
    /// Window size in days, counted back from now.
    pub days: Option<i32>,
}

impl WindowQuery {
    /// Resolve the window, falling back to `default` when absent.
    pub fn days_or(&self, default: i32) -> AppResult<i32> {
        match self.days {
            None => Ok(default),
            Some(days) if (1..=MAX_WINDOW_DAYS).contains(&days) => Ok(days),
            Some(_) => Err(AppError::InvalidInput(format!(
                "days must be between 1 and {}",
                MAX_WINDOW_DAYS
            ))),
        }
    }
}

/// Deserialize a present field as `Some`, so that `Option<Option<T>>` can tell
/// an explicit `null` apart from an absent key.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Require a non-blank text field, returning it trimmed.
pub(crate) fn required_text(value: Option<String>, field: &str) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::InvalidInput(format!("{} is required", field))),
    }
}

/// Require a foreign-key id.
pub(crate) fn required_id(value: Option<i32>, field: &str) -> AppResult<i32> {
    value.ok_or_else(|| AppError::InvalidInput(format!("{} is required", field)))
}

/// Blank optional text is stored as NULL.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an enumerated text value, naming the accepted values on failure.
pub(crate) fn parse_enum<T>(
    value: &str,
    field: &str,
    parse: fn(&str) -> Option<T>,
    allowed: &[&str],
) -> AppResult<T> {
    parse(value).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "{} must be one of: {}",
            field,
            allowed.join(", ")
        ))
    })
}
