//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TestTrack Server",
        version = "0.1.0",
        description = "API server for managing projects, test suites, test executions and bugs"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::healthz,
        api::health::ready,
        // Projects
        api::projects::list_projects,
        api::projects::create_project,
        api::projects::get_project,
        api::projects::update_project,
        api::projects::delete_project,
        // Sub-projects
        api::sub_projects::list_sub_projects,
        api::sub_projects::create_sub_project,
        api::sub_projects::get_sub_project,
        // Testers
        api::testers::list_testers,
        api::testers::create_tester,
        api::testers::get_tester,
        api::testers::delete_tester,
        // Test suites and cases
        api::test_suites::list_test_suites,
        api::test_suites::create_test_suite,
        api::test_suites::get_test_suite,
        api::test_cases::list_test_cases,
        api::test_cases::create_test_case,
        api::test_cases::get_test_case,
        // Executions
        api::executions::list_executions,
        api::executions::create_execution,
        api::executions::get_execution,
        // Bugs
        api::bugs::list_bugs,
        api::bugs::create_bug,
        api::bugs::get_bug,
        api::bugs::update_bug,
        // Reports
        api::reports::test_executions_by_suite,
        api::reports::projects_with_bugs,
        api::reports::bugs_per_tester,
        api::reports::bugs_discovered_last_week,
        api::reports::unassigned_bugs,
        // Charts
        api::charts::open_issues_by_project,
        api::charts::closed_issues_by_project,
        api::charts::bug_status_distribution,
        api::charts::bug_severity_distribution,
        api::charts::bug_priority_distribution,
        api::charts::execution_status_distribution,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Entities
            models::CreateProjectRequest,
            models::UpdateProjectRequest,
            models::ProjectResponse,
            models::CreateSubProjectRequest,
            models::SubProjectResponse,
            models::CreateTesterRequest,
            models::TesterResponse,
            models::CreateTestSuiteRequest,
            models::TestSuiteResponse,
            models::CreateTestCaseRequest,
            models::TestCaseResponse,
            models::CreateExecutionRequest,
            models::ExecutionResponse,
            models::CreateBugRequest,
            models::UpdateBugRequest,
            models::BugResponse,
            // Reports and charts
            models::SuiteExecutionSummary,
            models::ProjectBugSummary,
            models::TesterBugSummary,
            models::RecentBug,
            models::UnassignedBug,
            models::OpenIssuesPoint,
            models::ClosedIssuesPoint,
            models::BugStatusCount,
            models::BugSeverityCount,
            models::BugPriorityCount,
            models::ExecutionStatusCount,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness"),
        (name = "Projects", description = "Projects and their lifecycle"),
        (name = "Sub-projects", description = "Components within a project"),
        (name = "Testers", description = "People who run tests and file bugs"),
        (name = "Test Suites", description = "Groupings of test cases"),
        (name = "Test Cases", description = "Individual test cases"),
        (name = "Executions", description = "Append-only log of test runs"),
        (name = "Bugs", description = "Defect tracking"),
        (name = "Reports", description = "Tabular aggregations"),
        (name = "Charts", description = "Series and distributions for dashboards")
    )
)]
pub struct ApiDoc;
