//! Test suite API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateTestSuiteRequest, ListTestSuitesQuery, TestSuiteResponse};

#[utoipa::path(
    get,
    path = "/api/testsuites",
    tag = "Test Suites",
    params(ListTestSuitesQuery),
    responses(
        (status = 200, description = "Test suites", body = [TestSuiteResponse]),
    )
)]
pub async fn list_test_suites(
    pool: web::Data<DbPool>,
    query: web::Query<ListTestSuitesQuery>,
) -> AppResult<HttpResponse> {
    let suites: Vec<TestSuiteResponse> = pool
        .list_test_suites(query.project_id)
        .await?
        .into_iter()
        .map(TestSuiteResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(suites))
}

#[utoipa::path(
    post,
    path = "/api/testsuites",
    tag = "Test Suites",
    request_body = CreateTestSuiteRequest,
    responses(
        (status = 201, description = "Test suite created", body = TestSuiteResponse),
        (status = 400, description = "Missing name or project_id", body = ErrorResponse),
        (status = 409, description = "Unknown project", body = ErrorResponse),
    )
)]
pub async fn create_test_suite(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTestSuiteRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let suite = pool.create_test_suite(new).await?;

    Ok(HttpResponse::Created().json(TestSuiteResponse::from(suite)))
}

#[utoipa::path(
    get,
    path = "/api/testsuites/{id}",
    tag = "Test Suites",
    params(("id" = i32, Path, description = "Test suite ID")),
    responses(
        (status = 200, description = "Test suite", body = TestSuiteResponse),
        (status = 404, description = "Test suite not found", body = ErrorResponse),
    )
)]
pub async fn get_test_suite(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let suite = pool
        .get_test_suite(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test suite {}", id)))?;

    Ok(HttpResponse::Ok().json(TestSuiteResponse::from(suite)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/testsuites")
            .route(web::get().to(list_test_suites))
            .route(web::post().to(create_test_suite)),
    )
    .service(web::resource("/testsuites/{id}").route(web::get().to(get_test_suite)));
}
