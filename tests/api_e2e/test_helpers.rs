//! Shared test helpers for API E2E tests.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use actix_web::{App, dev::ServiceResponse, test, web};
use serde_json::{Value, json};
use testtrack_lib::api;
use testtrack_lib::config::Config;
use testtrack_lib::db::DbPool;
use tokio::sync::Mutex;

static MIGRATIONS_RUN: OnceLock<()> = OnceLock::new();
static NAME_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Held by every test so whole-table aggregates see only one test's rows.
pub static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Create a fresh DB pool. Migrations run only once.
pub async fn create_test_pool() -> DbPool {
    let mut config = Config::from_env().expect(
        "Failed to load config. Ensure RUST_ENV and DATABASE_URL are set, \
         and that PostgreSQL is running.",
    );
    if let Ok(url) = std::env::var("TRACKER_TEST_DATABASE_URL") {
        config.database.url = url;
    }
    config.database.max_connections = 2;
    config.database.min_connections = 1;

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");

    if MIGRATIONS_RUN.get().is_none() {
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");
        let _ = MIGRATIONS_RUN.set(());
    }

    pool
}

/// Generate a name no other test run has used.
pub fn unique_name(prefix: &str) -> String {
    let n = NAME_COUNTER.fetch_add(1, Ordering::SeqCst);
    let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}-{stamp}-{n}")
}

/// Create a test app with the same routes and extractor config as the server.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(api::json_config())
            .app_data(api::query_config())
            .app_data(api::path_config())
            .service(api::healthz)
            .service(web::scope("/api").configure(api::configure_api_routes)),
    )
    .await
}

async fn send<S>(app: &S, req: test::TestRequest) -> (u16, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(app, test::TestRequest::get().uri(uri)).await
}

pub async fn post_json<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(app, test::TestRequest::post().uri(uri).set_json(body)).await
}

pub async fn put_json<S>(app: &S, uri: &str, body: Value) -> (u16, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(app, test::TestRequest::put().uri(uri).set_json(body)).await
}

pub async fn delete<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    send(app, test::TestRequest::delete().uri(uri)).await
}

/// Ids of a minimal project tree with two testers.
pub struct Fixture {
    pub project_id: i64,
    pub sub_project_id: i64,
    pub test_suite_id: i64,
    pub test_case_id: i64,
    pub reporter_id: i64,
    pub assignee_id: i64,
}

/// Create a tester with a unique email and return its id.
pub async fn create_tester<S>(app: &S, prefix: &str) -> i64
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let name = unique_name(prefix);
    let (status, body) = post_json(
        app,
        "/api/testers",
        json!({"name": name, "email": format!("{name}@example.com"), "role": "QA Engineer"}),
    )
    .await;
    assert_eq!(status, 201, "tester create failed: {body:?}");
    body["tester_id"].as_i64().expect("tester_id")
}

/// Build a project, sub-project, suite, case and two testers.
pub async fn create_fixture<S>(app: &S, prefix: &str) -> Fixture
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, project) =
        post_json(app, "/api/projects", json!({"name": unique_name(prefix)})).await;
    assert_eq!(status, 201, "project create failed: {project:?}");
    let project_id = project["project_id"].as_i64().expect("project_id");

    let (status, sub_project) = post_json(
        app,
        "/api/subprojects",
        json!({"project_id": project_id, "name": "Checkout"}),
    )
    .await;
    assert_eq!(status, 201, "sub-project create failed: {sub_project:?}");

    let (status, suite) = post_json(
        app,
        "/api/testsuites",
        json!({"project_id": project_id, "name": "Smoke"}),
    )
    .await;
    assert_eq!(status, 201, "suite create failed: {suite:?}");
    let test_suite_id = suite["test_suite_id"].as_i64().expect("test_suite_id");

    let (status, case) = post_json(
        app,
        "/api/testcases",
        json!({"test_suite_id": test_suite_id, "name": "Pay with saved card"}),
    )
    .await;
    assert_eq!(status, 201, "case create failed: {case:?}");

    Fixture {
        project_id,
        sub_project_id: sub_project["sub_project_id"].as_i64().expect("sub_project_id"),
        test_suite_id,
        test_case_id: case["test_case_id"].as_i64().expect("test_case_id"),
        reporter_id: create_tester(app, "reporter").await,
        assignee_id: create_tester(app, "assignee").await,
    }
}

/// File a bug against the fixture and return the response body.
pub async fn create_bug<S>(app: &S, fx: &Fixture, extra: Value) -> Value
where
    S: actix_web::dev::Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let mut body = json!({
        "project_id": fx.project_id,
        "sub_project_id": fx.sub_project_id,
        "test_case_id": fx.test_case_id,
        "discovered_by": fx.reporter_id,
        "name": unique_name("bug"),
        "severity": "High",
        "priority": "P2",
    });
    if let (Some(target), Some(extra)) = (body.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            target.insert(k.clone(), v.clone());
        }
    }
    let (status, bug) = post_json(app, "/api/bugs", body).await;
    assert_eq!(status, 201, "bug create failed: {bug:?}");
    bug
}
