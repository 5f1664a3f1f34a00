//! E2E tests: reports and chart aggregations.

use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, Value as SqlValue};
use serde_json::{Value, json};
use testtrack_lib::db::DbPool;

use super::test_helpers::*;

/// Move a bug's discovery time into the past.
async fn backdate_bug(pool: &DbPool, bug: &Value, days: i32) {
    let id = bug["bug_id"].as_i64().expect("bug_id") as i32;
    pool.connection()
        .execute_raw(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "UPDATE bugs SET discovered_date = NOW() - make_interval(days => $1) WHERE bug_id = $2",
            [SqlValue::from(days), SqlValue::from(id)],
        ))
        .await
        .expect("backdate bug");
}

fn count_for(body: &Value, key: &str, value: &str) -> i64 {
    body.as_array()
        .expect("array")
        .iter()
        .find(|row| row[key] == value)
        .and_then(|row| row["count"].as_i64())
        .unwrap_or_default()
}

fn sum_counts(body: &Value) -> i64 {
    body.as_array()
        .expect("array")
        .iter()
        .map(|row| row["count"].as_i64().unwrap_or_default())
        .sum()
}

/// (1) Unassigned bugs come back by priority, then severity.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_unassigned_bugs_ordering() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "unassigned").await;

    let low = create_bug(&app, &fx, json!({"priority": "P3", "severity": "Low"})).await;
    let critical = create_bug(&app, &fx, json!({"priority": "P1", "severity": "Critical"})).await;
    let medium = create_bug(&app, &fx, json!({"priority": "P1", "severity": "Medium"})).await;
    let assigned =
        create_bug(&app, &fx, json!({"priority": "P1", "assigned_to": fx.assignee_id})).await;

    let (status, body) = get_json(&app, "/api/reports/unassigned-bugs").await;
    assert_eq!(status, 200);
    let rows = body.as_array().expect("array");

    assert!(
        rows.iter().all(|row| row["bug_id"] != assigned["bug_id"]),
        "assigned bug listed as unassigned"
    );

    let ours: Vec<Value> = [&critical, &medium, &low]
        .into_iter()
        .map(|b| b["bug_id"].clone())
        .collect();
    let order: Vec<Value> = rows
        .iter()
        .map(|row| row["bug_id"].clone())
        .filter(|id| ours.contains(id))
        .collect();
    assert_eq!(order, ours);
}

/// (2) Every distribution accounts for every bug exactly once.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_distributions_cover_all_bugs() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "distribution").await;
    create_bug(&app, &fx, json!({"severity": "Critical", "status": "Open"})).await;
    create_bug(&app, &fx, json!({"severity": "Low", "status": "Closed"})).await;

    let (status, all_bugs) = get_json(&app, "/api/bugs").await;
    assert_eq!(status, 200);
    let total = all_bugs.as_array().expect("array").len() as i64;

    for uri in [
        "/api/charts/bug-status-distribution",
        "/api/charts/bug-severity-distribution",
        "/api/charts/bug-priority-distribution",
    ] {
        let (status, body) = get_json(&app, uri).await;
        assert_eq!(status, 200, "{uri}");
        assert_eq!(sum_counts(&body), total, "{uri}");
    }
}

/// (3) Project bug summary splits open and closed by sub-project.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_projects_with_bugs_counts() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "project-bugs").await;
    create_bug(&app, &fx, json!({"severity": "Critical", "status": "Open"})).await;
    create_bug(&app, &fx, json!({"severity": "High", "status": "Verified"})).await;
    create_bug(&app, &fx, json!({"severity": "High", "status": "Deferred"})).await;

    let (status, body) = get_json(&app, "/api/reports/projects-with-bugs").await;
    assert_eq!(status, 200);
    let row = body
        .as_array()
        .expect("array")
        .iter()
        .find(|row| row["sub_project_id"].as_i64() == Some(fx.sub_project_id))
        .expect("sub-project row");

    assert_eq!(row["total_bugs"], 3);
    assert_eq!(row["open_bugs"], 1);
    assert_eq!(row["closed_bugs"], 1);
    assert_eq!(row["critical_bugs"], 1);
    assert_eq!(row["high_bugs"], 2);
}

/// (4) Per-tester totals count assignments and resolutions.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_bugs_per_tester() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "per-tester").await;
    create_bug(&app, &fx, json!({"assigned_to": fx.assignee_id})).await;
    create_bug(&app, &fx, json!({"assigned_to": fx.assignee_id, "status": "Closed"})).await;

    let (status, body) = get_json(&app, "/api/reports/bugs-per-tester?days=30").await;
    assert_eq!(status, 200);
    let row = body
        .as_array()
        .expect("array")
        .iter()
        .find(|row| row["tester_id"].as_i64() == Some(fx.assignee_id))
        .expect("assignee row");

    assert_eq!(row["total_bugs_assigned"], 2);
    assert_eq!(row["bugs_assigned_period"], 2);
    assert_eq!(row["bugs_resolved"], 1);
}

/// (5) Suite summary counts cases and executions, and recent bugs include new ones.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_suite_summary_and_recent_bugs() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "suite-summary").await;
    for outcome in ["Pass", "Fail"] {
        let (status, _) = post_json(
            &app,
            "/api/executions",
            json!({"test_case_id": fx.test_case_id, "tester_id": fx.reporter_id, "status": outcome}),
        )
        .await;
        assert_eq!(status, 201);
    }
    let bug = create_bug(&app, &fx, json!({})).await;

    let (status, body) = get_json(&app, "/api/reports/test-executions-by-suite").await;
    assert_eq!(status, 200);
    let row = body
        .as_array()
        .expect("array")
        .iter()
        .find(|row| row["test_suite_id"].as_i64() == Some(fx.test_suite_id))
        .expect("suite row");
    assert_eq!(row["total_test_cases"], 1);
    assert_eq!(row["total_executions"], 2);
    assert_eq!(row["recent_executions"], 2);

    let (status, body) = get_json(&app, "/api/reports/bugs-discovered-last-week").await;
    assert_eq!(status, 200);
    assert!(
        body.as_array()
            .expect("array")
            .iter()
            .any(|row| row["bug_id"] == bug["bug_id"])
    );
}

/// (6) Open issue series only counts open bugs.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_open_issues_series() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "open-series").await;
    create_bug(&app, &fx, json!({"status": "New"})).await;
    create_bug(&app, &fx, json!({"status": "Retest"})).await;
    create_bug(&app, &fx, json!({"status": "Closed"})).await;

    let (status, body) = get_json(&app, "/api/charts/open-issues-by-project?days=7").await;
    assert_eq!(status, 200);
    let total: i64 = body
        .as_array()
        .expect("array")
        .iter()
        .filter(|row| row["project_id"].as_i64() == Some(fx.project_id))
        .map(|row| row["open_issues"].as_i64().unwrap_or_default())
        .sum();
    assert_eq!(total, 2);
}

/// (7) Closing a bug shows up in the closed issue series on its resolution day.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_closed_issues_series() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "closed-series").await;
    let bug = create_bug(&app, &fx, json!({"status": "Open"})).await;
    create_bug(&app, &fx, json!({"status": "Fixed"})).await;

    let project_rows = |body: &Value| -> Vec<Value> {
        body.as_array()
            .expect("array")
            .iter()
            .filter(|row| row["project_id"].as_i64() == Some(fx.project_id))
            .cloned()
            .collect()
    };

    let (status, before) = get_json(&app, "/api/charts/closed-issues-by-project").await;
    assert_eq!(status, 200);
    let rows = project_rows(&before);
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["date"].is_null());
    assert_eq!(rows[0]["closed_issues"], 0);

    let (status, _) = put_json(
        &app,
        &format!("/api/bugs/{}", bug["bug_id"]),
        json!({"status": "Closed"}),
    )
    .await;
    assert_eq!(status, 200);

    let (status, after) = get_json(&app, "/api/charts/closed-issues-by-project?days=7").await;
    assert_eq!(status, 200);
    let rows = project_rows(&after);
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["date"].is_string());
    assert_eq!(rows[0]["closed_issues"], 1);
}

/// (8) Execution outcomes are counted per status, only inside the window.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_execution_status_distribution_window() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "exec-dist").await;
    let uri = "/api/charts/execution-status-distribution?days=30";

    let (status, before) = get_json(&app, uri).await;
    assert_eq!(status, 200);

    let old_date = (chrono::Utc::now() - chrono::Duration::days(90)).to_rfc3339();
    for (outcome, execution_date) in [
        ("Pass", None),
        ("Pass", None),
        ("Blocked", None),
        ("Fail", Some(old_date)),
    ] {
        let mut body = json!({
            "test_case_id": fx.test_case_id,
            "tester_id": fx.reporter_id,
            "status": outcome,
        });
        if let Some(date) = execution_date {
            body["execution_date"] = json!(date);
        }
        let (status, resp) = post_json(&app, "/api/executions", body).await;
        assert_eq!(status, 201, "{resp:?}");
    }

    let (status, after) = get_json(&app, uri).await;
    assert_eq!(status, 200);
    assert_eq!(count_for(&after, "status", "Pass") - count_for(&before, "status", "Pass"), 2);
    assert_eq!(
        count_for(&after, "status", "Blocked") - count_for(&before, "status", "Blocked"),
        1
    );
    assert_eq!(count_for(&after, "status", "Fail"), count_for(&before, "status", "Fail"));
}

/// (9) The last-week report is newest first and drops older bugs.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_bugs_discovered_last_week_window() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "last-week").await;

    let older = create_bug(&app, &fx, json!({})).await;
    let newer = create_bug(&app, &fx, json!({})).await;
    let stale = create_bug(&app, &fx, json!({})).await;
    backdate_bug(&pool, &older, 2).await;
    backdate_bug(&pool, &stale, 30).await;

    let (status, body) = get_json(&app, "/api/reports/bugs-discovered-last-week").await;
    assert_eq!(status, 200);
    let rows = body.as_array().expect("array");

    assert!(rows.iter().all(|row| row["bug_id"] != stale["bug_id"]));

    let ours: Vec<Value> = rows
        .iter()
        .map(|row| row["bug_id"].clone())
        .filter(|id| *id == older["bug_id"] || *id == newer["bug_id"])
        .collect();
    assert_eq!(ours, vec![newer["bug_id"].clone(), older["bug_id"].clone()]);

    let dates: Vec<&str> = rows
        .iter()
        .filter_map(|row| row["discovered_date"].as_str())
        .collect();
    let parsed: Vec<chrono::DateTime<chrono::Utc>> = dates
        .iter()
        .map(|d| d.parse().expect("timestamp"))
        .collect();
    assert!(parsed.windows(2).all(|w| w[0] >= w[1]));
}
