//! Test execution API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateExecutionRequest, ExecutionResponse, ListExecutionsQuery};

/// List executions, newest first.
#[utoipa::path(
    get,
    path = "/api/executions",
    tag = "Executions",
    params(ListExecutionsQuery),
    responses(
        (status = 200, description = "Test executions", body = [ExecutionResponse]),
    )
)]
pub async fn list_executions(
    pool: web::Data<DbPool>,
    query: web::Query<ListExecutionsQuery>,
) -> AppResult<HttpResponse> {
    let executions: Vec<ExecutionResponse> = pool
        .list_executions(&query)
        .await?
        .into_iter()
        .map(ExecutionResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(executions))
}

/// Record a test execution.
#[utoipa::path(
    post,
    path = "/api/executions",
    tag = "Executions",
    request_body = CreateExecutionRequest,
    responses(
        (status = 201, description = "Execution recorded", body = ExecutionResponse),
        (status = 400, description = "Missing field or unknown status", body = ErrorResponse),
        (status = 409, description = "Unknown test case or tester", body = ErrorResponse),
    )
)]
pub async fn create_execution(
    pool: web::Data<DbPool>,
    body: web::Json<CreateExecutionRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let execution = pool.create_execution(new).await?;

    Ok(HttpResponse::Created().json(ExecutionResponse::from(execution)))
}

#[utoipa::path(
    get,
    path = "/api/executions/{id}",
    tag = "Executions",
    params(("id" = i32, Path, description = "Execution ID")),
    responses(
        (status = 200, description = "Test execution", body = ExecutionResponse),
        (status = 404, description = "Execution not found", body = ErrorResponse),
    )
)]
pub async fn get_execution(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let execution = pool
        .get_execution(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Execution {}", id)))?;

    Ok(HttpResponse::Ok().json(ExecutionResponse::from(execution)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/executions")
            .route(web::get().to(list_executions))
            .route(web::post().to(create_execution)),
    )
    .service(web::resource("/executions/{id}").route(web::get().to(get_execution)));
}
