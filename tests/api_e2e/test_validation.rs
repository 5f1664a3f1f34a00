//! E2E tests: request validation returns 400 with an error body.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_missing_required_fields() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    for (uri, body) in [
        ("/api/projects", json!({})),
        ("/api/subprojects", json!({"name": "orphan"})),
        ("/api/testers", json!({"name": "No Email"})),
        ("/api/testsuites", json!({"project_id": 1})),
        ("/api/testcases", json!({"name": "no suite"})),
        ("/api/executions", json!({"test_case_id": 1, "status": "Pass"})),
        ("/api/bugs", json!({"project_id": 1, "name": "no reporter"})),
    ] {
        let (status, resp) = post_json(&app, uri, body).await;
        assert_eq!(status, 400, "{uri}: {resp:?}");
        assert!(resp["error"].is_string(), "{uri}: {resp:?}");
    }
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_unknown_reporter_conflicts() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "fk").await;

    let (status, body) = post_json(
        &app,
        "/api/bugs",
        json!({
            "project_id": fx.project_id,
            "discovered_by": 2147483647,
            "name": "ghost reporter",
            "severity": "Low",
            "priority": "P4",
        }),
    )
    .await;
    assert_eq!(status, 409, "{body:?}");
    assert!(body["error"].is_string());
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_project_date_range() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = post_json(
        &app,
        "/api/projects",
        json!({"name": unique_name("dates"), "start_date": "2025-06-01", "end_date": "2025-01-01"}),
    )
    .await;
    assert_eq!(status, 400, "{body:?}");

    let (status, project) = post_json(
        &app,
        "/api/projects",
        json!({"name": unique_name("dates"), "start_date": "2025-01-01"}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(project["status"], "Active");

    let (status, body) = put_json(
        &app,
        &format!("/api/projects/{}", project["project_id"]),
        json!({"end_date": "2024-12-31"}),
    )
    .await;
    assert_eq!(status, 400, "{body:?}");
}
