//! E2E tests: bug lifecycle and tester deletion rules.

use serde_json::json;

use super::test_helpers::*;

/// (1) A new bug gets the documented defaults and no lifecycle timestamps.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_bug_defaults() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "bug-defaults").await;

    let bug = create_bug(&app, &fx, json!({})).await;

    assert_eq!(bug["status"], "New");
    assert_eq!(bug["type"], "Functional");
    assert!(bug["assigned_to"].is_null());
    assert!(bug["assigned_date"].is_null());
    assert!(bug["resolution_date"].is_null());
    assert!(bug["discovered_date"].is_string());

    let id = bug["bug_id"].as_i64().expect("bug_id");
    let (status, fetched) = get_json(&app, &format!("/api/bugs/{id}")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched["name"], bug["name"]);
}

/// (2) Assigning stamps assigned_date, closing stamps resolution_date,
/// reopening keeps both.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_assign_close_reopen() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "bug-lifecycle").await;
    let bug = create_bug(&app, &fx, json!({})).await;
    let uri = format!("/api/bugs/{}", bug["bug_id"]);

    let (status, assigned) = put_json(
        &app,
        &uri,
        json!({"assigned_to": fx.assignee_id, "status": "Assigned"}),
    )
    .await;
    assert_eq!(status, 200, "{assigned:?}");
    assert_eq!(assigned["assigned_to"], fx.assignee_id);
    assert!(assigned["assigned_date"].is_string());
    assert!(assigned["resolution_date"].is_null());

    let (status, closed) = put_json(&app, &uri, json!({"status": "Closed"})).await;
    assert_eq!(status, 200, "{closed:?}");
    assert!(closed["resolution_date"].is_string());
    assert_eq!(closed["assigned_date"], assigned["assigned_date"]);

    let (status, reopened) = put_json(&app, &uri, json!({"status": "Reopened"})).await;
    assert_eq!(status, 200, "{reopened:?}");
    assert_eq!(reopened["status"], "Reopened");
    assert_eq!(reopened["resolution_date"], closed["resolution_date"]);
}

/// (3) Explicit null clears an optional field, omission leaves it alone.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_null_clears_field() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "bug-null").await;
    let bug = create_bug(
        &app,
        &fx,
        json!({"environment": "Chrome 120", "assigned_to": fx.assignee_id}),
    )
    .await;
    assert!(bug["assigned_date"].is_string());
    let uri = format!("/api/bugs/{}", bug["bug_id"]);

    let (status, updated) = put_json(&app, &uri, json!({"assigned_to": null})).await;
    assert_eq!(status, 200, "{updated:?}");
    assert!(updated["assigned_to"].is_null());
    assert_eq!(updated["environment"], "Chrome 120");
    assert_eq!(updated["assigned_date"], bug["assigned_date"]);
}

/// (4) Bug list filters combine.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_bugs_filters() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "bug-filter").await;
    create_bug(&app, &fx, json!({"severity": "Critical"})).await;
    create_bug(&app, &fx, json!({"severity": "Low"})).await;

    let (status, body) = get_json(
        &app,
        &format!("/api/bugs?project_id={}&severity=Critical", fx.project_id),
    )
    .await;
    assert_eq!(status, 200);
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["severity"], "Critical");
}

/// (5) A tester who discovered bugs cannot be deleted.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_reporter_conflicts() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "tester-conflict").await;
    create_bug(&app, &fx, json!({})).await;

    let (status, body) = delete(&app, &format!("/api/testers/{}", fx.reporter_id)).await;
    assert_eq!(status, 409, "{body:?}");
    assert!(body["error"].is_string());

    let (status, _) = get_json(&app, &format!("/api/testers/{}", fx.reporter_id)).await;
    assert_eq!(status, 200);
}

/// (6) Deleting an assignee unassigns their bugs instead of failing.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_assignee_unassigns() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "tester-unassign").await;
    let bug = create_bug(&app, &fx, json!({"assigned_to": fx.assignee_id})).await;

    let (status, _) = delete(&app, &format!("/api/testers/{}", fx.assignee_id)).await;
    assert_eq!(status, 204);

    let (status, fetched) = get_json(&app, &format!("/api/bugs/{}", bug["bug_id"])).await;
    assert_eq!(status, 200);
    assert!(fetched["assigned_to"].is_null());
}

/// (7) Duplicate tester emails are rejected.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_tester_email() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let email = format!("{}@example.com", unique_name("dup"));

    let (status, _) = post_json(&app, "/api/testers", json!({"name": "A", "email": email})).await;
    assert_eq!(status, 201);
    let (status, body) =
        post_json(&app, "/api/testers", json!({"name": "B", "email": email})).await;
    assert_eq!(status, 409, "{body:?}");
}
