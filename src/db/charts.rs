//! Chart queries: per-project daily series and distributions.

use sea_orm::{DatabaseBackend, Statement, Value};

use crate::error::AppResult;
use crate::models::{
    BugPriorityCount, BugSeverityCount, BugStatusCount, ClosedIssuesPoint, ExecutionStatusCount,
    OpenIssuesPoint, StatusCategory,
};

use super::DbPool;
use super::sql::{priority_rank, severity_rank, status_list};

impl DbPool {
    /// Open bugs per project and discovery day.
    ///
    /// Projects without a matching bug appear once with a null date and a
    /// zero count.
    pub async fn open_issues_by_project(&self, days: i32) -> AppResult<Vec<OpenIssuesPoint>> {
        let sql = format!(
            r#"
            SELECT
                p.project_id,
                p.name AS project_name,
                DATE(b.discovered_date) AS date,
                COUNT(b.bug_id) AS open_issues
            FROM projects p
            LEFT JOIN bugs b ON p.project_id = b.project_id
                AND b.status IN ({open})
                AND b.discovered_date >= CURRENT_DATE - make_interval(days => $1)
            GROUP BY p.project_id, p.name, DATE(b.discovered_date)
            ORDER BY date DESC NULLS LAST, p.name
            "#,
            open = status_list(StatusCategory::Open),
        );

        self.fetch_rows(
            "Failed to build open issues chart",
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [Value::from(days)]),
        )
        .await
    }

    /// Resolved bugs per project and resolution day.
    pub async fn closed_issues_by_project(&self, days: i32) -> AppResult<Vec<ClosedIssuesPoint>> {
        let sql = format!(
            r#"
            SELECT
                p.project_id,
                p.name AS project_name,
                DATE(b.resolution_date) AS date,
                COUNT(b.bug_id) AS closed_issues
            FROM projects p
            LEFT JOIN bugs b ON p.project_id = b.project_id
                AND b.status IN ({closed})
                AND b.resolution_date >= CURRENT_DATE - make_interval(days => $1)
            GROUP BY p.project_id, p.name, DATE(b.resolution_date)
            ORDER BY date DESC NULLS LAST, p.name
            "#,
            closed = status_list(StatusCategory::Closed),
        );

        self.fetch_rows(
            "Failed to build closed issues chart",
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [Value::from(days)]),
        )
        .await
    }

    pub async fn bug_status_distribution(&self) -> AppResult<Vec<BugStatusCount>> {
        let sql = r#"
            SELECT status, COUNT(*) AS count
            FROM bugs
            GROUP BY status
            ORDER BY count DESC, status
        "#;

        self.fetch_rows(
            "Failed to build bug status chart",
            Statement::from_string(DatabaseBackend::Postgres, sql),
        )
        .await
    }

    /// Bug counts per severity, Critical first.
    pub async fn bug_severity_distribution(&self) -> AppResult<Vec<BugSeverityCount>> {
        let sql = format!(
            "SELECT severity, COUNT(*) AS count FROM bugs GROUP BY severity ORDER BY {}",
            severity_rank("severity")
        );

        self.fetch_rows(
            "Failed to build bug severity chart",
            Statement::from_string(DatabaseBackend::Postgres, sql),
        )
        .await
    }

    /// Bug counts per priority, P1 first.
    pub async fn bug_priority_distribution(&self) -> AppResult<Vec<BugPriorityCount>> {
        let sql = format!(
            "SELECT priority, COUNT(*) AS count FROM bugs GROUP BY priority ORDER BY {}",
            priority_rank("priority")
        );

        self.fetch_rows(
            "Failed to build bug priority chart",
            Statement::from_string(DatabaseBackend::Postgres, sql),
        )
        .await
    }

    /// Execution outcomes recorded within the window.
    pub async fn execution_status_distribution(
        &self,
        days: i32,
    ) -> AppResult<Vec<ExecutionStatusCount>> {
        let sql = r#"
            SELECT status, COUNT(*) AS count
            FROM test_executions
            WHERE execution_date >= NOW() - make_interval(days => $1)
            GROUP BY status
            ORDER BY count DESC, status
        "#;

        self.fetch_rows(
            "Failed to build execution status chart",
            Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, [Value::from(days)]),
        )
        .await
    }
}
