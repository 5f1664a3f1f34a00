//! Test case API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateTestCaseRequest, ListTestCasesQuery, TestCaseResponse};

#[utoipa::path(
    get,
    path = "/api/testcases",
    tag = "Test Cases",
    params(ListTestCasesQuery),
    responses(
        (status = 200, description = "Test cases", body = [TestCaseResponse]),
    )
)]
pub async fn list_test_cases(
    pool: web::Data<DbPool>,
    query: web::Query<ListTestCasesQuery>,
) -> AppResult<HttpResponse> {
    let cases: Vec<TestCaseResponse> = pool
        .list_test_cases(query.test_suite_id)
        .await?
        .into_iter()
        .map(TestCaseResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(cases))
}

#[utoipa::path(
    post,
    path = "/api/testcases",
    tag = "Test Cases",
    request_body = CreateTestCaseRequest,
    responses(
        (status = 201, description = "Test case created", body = TestCaseResponse),
        (status = 400, description = "Missing field or unknown priority", body = ErrorResponse),
        (status = 409, description = "Unknown test suite", body = ErrorResponse),
    )
)]
pub async fn create_test_case(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTestCaseRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let case = pool.create_test_case(new).await?;

    Ok(HttpResponse::Created().json(TestCaseResponse::from(case)))
}

#[utoipa::path(
    get,
    path = "/api/testcases/{id}",
    tag = "Test Cases",
    params(("id" = i32, Path, description = "Test case ID")),
    responses(
        (status = 200, description = "Test case", body = TestCaseResponse),
        (status = 404, description = "Test case not found", body = ErrorResponse),
    )
)]
pub async fn get_test_case(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let case = pool
        .get_test_case(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Test case {}", id)))?;

    Ok(HttpResponse::Ok().json(TestCaseResponse::from(case)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/testcases")
            .route(web::get().to(list_test_cases))
            .route(web::post().to(create_test_case)),
    )
    .service(web::resource("/testcases/{id}").route(web::get().to(get_test_case)));
}
