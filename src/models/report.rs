//! Row types returned by the report and chart endpoints.
//!
//! Counts come straight from PostgreSQL `COUNT(...)` and are therefore `i64`.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;

/// Test case and execution totals for one suite.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct SuiteExecutionSummary {
    pub test_suite_id: i32,
    pub suite_name: String,
    pub project_name: String,
    pub total_test_cases: i64,
    pub total_executions: i64,
    /// Executions inside the requested window.
    pub recent_executions: i64,
}

/// Bug counts for one sub-project of an active project.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct ProjectBugSummary {
    pub project_id: i32,
    pub project_name: String,
    pub project_status: String,
    /// Null when the project has no sub-projects.
    pub sub_project_id: Option<i32>,
    pub sub_project_name: Option<String>,
    pub total_bugs: i64,
    pub open_bugs: i64,
    pub closed_bugs: i64,
    pub critical_bugs: i64,
    pub high_bugs: i64,
    pub medium_bugs: i64,
    pub low_bugs: i64,
}

/// Assignment totals for one tester.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct TesterBugSummary {
    pub tester_id: i32,
    pub tester_name: String,
    pub email: String,
    /// Bugs assigned inside the requested window.
    pub bugs_assigned_period: i64,
    pub total_bugs_assigned: i64,
    pub bugs_resolved: i64,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct RecentBug {
    pub bug_id: i32,
    pub bug_name: String,
    pub description: Option<String>,
    pub status: String,
    pub severity: String,
    pub priority: String,
    pub discovered_date: DateTime<Utc>,
    pub discovered_by_name: String,
    pub tester_email: String,
    pub test_case_id: Option<i32>,
    pub test_case_name: Option<String>,
    pub project_name: String,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct UnassignedBug {
    pub bug_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub severity: String,
    pub priority: String,
    #[serde(rename = "type")]
    pub bug_type: String,
    pub discovered_date: DateTime<Utc>,
    pub environment: Option<String>,
    pub discovered_by_name: String,
    pub project_name: String,
    pub sub_project_name: Option<String>,
}

/// Open bugs discovered on one day for one project.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct OpenIssuesPoint {
    pub project_id: i32,
    pub project_name: String,
    /// Null for projects without matching bugs.
    pub date: Option<NaiveDate>,
    pub open_issues: i64,
}

/// Bugs resolved on one day for one project.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct ClosedIssuesPoint {
    pub project_id: i32,
    pub project_name: String,
    /// Null for projects without matching bugs.
    pub date: Option<NaiveDate>,
    pub closed_issues: i64,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct BugStatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct BugSeverityCount {
    pub severity: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct BugPriorityCount {
    pub priority: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct ExecutionStatusCount {
    pub status: String,
    pub count: i64,
}
