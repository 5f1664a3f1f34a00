//! E2E tests: demo seeding against a database that already saw a seed.

use testtrack_lib::db::seed::seed_demo_data;

use super::test_helpers::*;

async fn delete_all_projects<S>(app: &S)
where
    S: actix_web::dev::Service<actix_http::Request, Response = actix_web::dev::ServiceResponse, Error = actix_web::Error>,
{
    let (status, projects) = get_json(app, "/api/projects").await;
    assert_eq!(status, 200);
    for project in projects.as_array().expect("array") {
        let (status, body) = delete(app, &format!("/api/projects/{}", project["project_id"])).await;
        assert_eq!(status, 204, "{body:?}");
    }
}

/// Deleting the seeded projects leaves the demo testers behind; seeding again
/// reuses them instead of failing on their emails.
#[actix_rt::test]
#[ignore = "requires PostgreSQL"]
async fn test_reseed_after_projects_deleted() {
    let _guard = DB_LOCK.lock().await;
    let pool = create_test_pool().await;
    let app = create_test_app(&pool).await;

    delete_all_projects(&app).await;
    assert!(seed_demo_data(&pool).await.expect("first seed"));

    delete_all_projects(&app).await;
    assert!(seed_demo_data(&pool).await.expect("second seed"));

    // A populated database is left alone.
    assert!(!seed_demo_data(&pool).await.expect("third seed"));

    let (status, testers) = get_json(&app, "/api/testers").await;
    assert_eq!(status, 200);
    let alice = testers
        .as_array()
        .expect("array")
        .iter()
        .filter(|t| t["email"] == "alice.johnson@test.com")
        .count();
    assert_eq!(alice, 1);

    let (status, bugs) = get_json(&app, "/api/bugs").await;
    assert_eq!(status, 200);
    assert_eq!(bugs.as_array().expect("array").len(), 25);
}
