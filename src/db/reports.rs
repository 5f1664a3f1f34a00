//! Report queries: grouped counts aggregated in PostgreSQL.

use sea_orm::{DatabaseBackend, FromQueryResult, Statement, Value};

use crate::error::{AppError, AppResult};
use crate::models::project::ACTIVE_PROJECT_STATUS;
use crate::models::{
    ProjectBugSummary, RecentBug, StatusCategory, SuiteExecutionSummary, TesterBugSummary,
    UnassignedBug,
};

use super::DbPool;
use super::sql::{priority_rank, severity_rank, status_list};

/// Days covered by the bugs-discovered-last-week report.
pub const LAST_WEEK_DAYS: i32 = 7;

impl DbPool {
    /// Run a raw statement and map every row.
    pub(super) async fn fetch_rows<T: FromQueryResult>(
        &self,
        context: &str,
        stmt: Statement,
    ) -> AppResult<Vec<T>> {
        T::find_by_statement(stmt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::from_db(context, e))
    }

    /// Test case and execution counts per suite. Suites without executions
    /// still appear with zero counts.
    pub async fn test_executions_by_suite(&self, days: i32) -> AppResult<Vec<SuiteExecutionSummary>> {
        let sql = r#"
            SELECT
                ts.test_suite_id,
                ts.name AS suite_name,
                p.name AS project_name,
                COUNT(DISTINCT tc.test_case_id) AS total_test_cases,
                COUNT(te.execution_id) AS total_executions,
                COUNT(te.execution_id) FILTER (
                    WHERE te.execution_date >= NOW() - make_interval(days => $1)
                ) AS recent_executions
            FROM test_suites ts
            JOIN projects p ON ts.project_id = p.project_id
            LEFT JOIN test_cases tc ON ts.test_suite_id = tc.test_suite_id
            LEFT JOIN test_executions te ON tc.test_case_id = te.test_case_id
            GROUP BY ts.test_suite_id, ts.name, p.name
            ORDER BY p.name, ts.name
        "#;

        self.fetch_rows(
            "Failed to build test execution report",
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [Value::from(days)]),
        )
        .await
    }

    /// Bug counts per sub-project of every active project.
    ///
    /// Bugs are attributed through their sub-project, so bugs filed without
    /// one are not counted. Projects without sub-projects still appear once
    /// with a null sub-project and zero counts.
    pub async fn projects_with_bugs(&self) -> AppResult<Vec<ProjectBugSummary>> {
        let sql = format!(
            r#"
            SELECT
                p.project_id,
                p.name AS project_name,
                p.status AS project_status,
                sp.sub_project_id,
                sp.name AS sub_project_name,
                COUNT(b.bug_id) AS total_bugs,
                COUNT(b.bug_id) FILTER (WHERE b.status IN ({open})) AS open_bugs,
                COUNT(b.bug_id) FILTER (WHERE b.status IN ({closed})) AS closed_bugs,
                COUNT(b.bug_id) FILTER (WHERE b.severity = 'Critical') AS critical_bugs,
                COUNT(b.bug_id) FILTER (WHERE b.severity = 'High') AS high_bugs,
                COUNT(b.bug_id) FILTER (WHERE b.severity = 'Medium') AS medium_bugs,
                COUNT(b.bug_id) FILTER (WHERE b.severity = 'Low') AS low_bugs
            FROM projects p
            LEFT JOIN sub_projects sp ON p.project_id = sp.project_id
            LEFT JOIN bugs b ON sp.sub_project_id = b.sub_project_id
            WHERE p.status = $1
            GROUP BY p.project_id, p.name, p.status, sp.sub_project_id, sp.name
            ORDER BY p.name, sp.name
            "#,
            open = status_list(StatusCategory::Open),
            closed = status_list(StatusCategory::Closed),
        );

        self.fetch_rows(
            "Failed to build project bug report",
            Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                [Value::from(ACTIVE_PROJECT_STATUS)],
            ),
        )
        .await
    }

    /// Assignment counts per tester, busiest in the window first.
    pub async fn bugs_per_tester(&self, days: i32) -> AppResult<Vec<TesterBugSummary>> {
        let sql = format!(
            r#"
            SELECT
                t.tester_id,
                t.name AS tester_name,
                t.email,
                COUNT(b.bug_id) FILTER (
                    WHERE b.assigned_date >= NOW() - make_interval(days => $1)
                ) AS bugs_assigned_period,
                COUNT(b.bug_id) AS total_bugs_assigned,
                COUNT(b.bug_id) FILTER (WHERE b.status IN ({closed})) AS bugs_resolved
            FROM testers t
            LEFT JOIN bugs b ON t.tester_id = b.assigned_to
            GROUP BY t.tester_id, t.name, t.email
            ORDER BY bugs_assigned_period DESC, t.name
            "#,
            closed = status_list(StatusCategory::Closed),
        );

        self.fetch_rows(
            "Failed to build tester bug report",
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [Value::from(days)]),
        )
        .await
    }

    /// Bugs discovered since the start of the day a week ago.
    pub async fn bugs_discovered_last_week(&self) -> AppResult<Vec<RecentBug>> {
        let sql = r#"
            SELECT
                b.bug_id,
                b.name AS bug_name,
                b.description,
                b.status,
                b.severity,
                b.priority,
                b.discovered_date,
                t.name AS discovered_by_name,
                t.email AS tester_email,
                tc.test_case_id,
                tc.name AS test_case_name,
                p.name AS project_name
            FROM bugs b
            JOIN testers t ON b.discovered_by = t.tester_id
            LEFT JOIN test_cases tc ON b.test_case_id = tc.test_case_id
            JOIN projects p ON b.project_id = p.project_id
            WHERE b.discovered_date >= CURRENT_DATE - make_interval(days => $1)
            ORDER BY b.discovered_date DESC, b.bug_id DESC
        "#;

        self.fetch_rows(
            "Failed to build recent bug report",
            Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                [Value::from(LAST_WEEK_DAYS)],
            ),
        )
        .await
    }

    /// Bugs with no assignee, most urgent first.
    pub async fn unassigned_bugs(&self) -> AppResult<Vec<UnassignedBug>> {
        let sql = format!(
            r#"
            SELECT
                b.bug_id,
                b.name,
                b.description,
                b.status,
                b.severity,
                b.priority,
                b.type AS bug_type,
                b.discovered_date,
                b.environment,
                t.name AS discovered_by_name,
                p.name AS project_name,
                sp.name AS sub_project_name
            FROM bugs b
            JOIN testers t ON b.discovered_by = t.tester_id
            JOIN projects p ON b.project_id = p.project_id
            LEFT JOIN sub_projects sp ON b.sub_project_id = sp.sub_project_id
            WHERE b.assigned_to IS NULL
            ORDER BY {priority}, {severity}, b.discovered_date DESC
            "#,
            priority = priority_rank("b.priority"),
            severity = severity_rank("b.severity"),
        );

        self.fetch_rows(
            "Failed to build unassigned bug report",
            Statement::from_string(DatabaseBackend::Postgres, sql),
        )
        .await
    }
}
