//! E2E tests: deleting a project removes everything under it.

use serde_json::json;

use super::test_helpers::*;

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_project_cascades() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;
    let fx = create_fixture(&app, "cascade").await;
    let bug = create_bug(&app, &fx, json!({})).await;

    let (status, execution) = post_json(
        &app,
        "/api/executions",
        json!({"test_case_id": fx.test_case_id, "tester_id": fx.reporter_id, "status": "Fail"}),
    )
    .await;
    assert_eq!(status, 201, "{execution:?}");

    let (status, _) = delete(&app, &format!("/api/projects/{}", fx.project_id)).await;
    assert_eq!(status, 204);

    for uri in [
        format!("/api/projects/{}", fx.project_id),
        format!("/api/subprojects/{}", fx.sub_project_id),
        format!("/api/testsuites/{}", fx.test_suite_id),
        format!("/api/testcases/{}", fx.test_case_id),
        format!("/api/executions/{}", execution["execution_id"]),
        format!("/api/bugs/{}", bug["bug_id"]),
    ] {
        let (status, body) = get_json(&app, &uri).await;
        assert_eq!(status, 404, "{uri} still present: {body:?}");
    }

    // Testers are global and survive.
    let (status, _) = get_json(&app, &format!("/api/testers/{}", fx.reporter_id)).await;
    assert_eq!(status, 200);
}

#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_missing_project() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    let (status, body) = delete(&app, "/api/projects/2147483647").await;
    assert_eq!(status, 404);
    assert!(body["error"].is_string());
}
