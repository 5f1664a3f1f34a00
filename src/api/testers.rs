//! Tester API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateTesterRequest, TesterResponse};

#[utoipa::path(
    get,
    path = "/api/testers",
    tag = "Testers",
    responses(
        (status = 200, description = "Testers", body = [TesterResponse]),
    )
)]
pub async fn list_testers(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let testers: Vec<TesterResponse> = pool
        .list_testers()
        .await?
        .into_iter()
        .map(TesterResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(testers))
}

#[utoipa::path(
    post,
    path = "/api/testers",
    tag = "Testers",
    request_body = CreateTesterRequest,
    responses(
        (status = 201, description = "Tester created", body = TesterResponse),
        (status = 400, description = "Missing name or email", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
pub async fn create_tester(
    pool: web::Data<DbPool>,
    body: web::Json<CreateTesterRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let tester = pool.create_tester(new).await?;

    Ok(HttpResponse::Created().json(TesterResponse::from(tester)))
}

#[utoipa::path(
    get,
    path = "/api/testers/{id}",
    tag = "Testers",
    params(("id" = i32, Path, description = "Tester ID")),
    responses(
        (status = 200, description = "Tester", body = TesterResponse),
        (status = 404, description = "Tester not found", body = ErrorResponse),
    )
)]
pub async fn get_tester(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let tester = pool
        .get_tester(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Tester {}", id)))?;

    Ok(HttpResponse::Ok().json(TesterResponse::from(tester)))
}

/// Delete a tester.
///
/// Refused with 409 while the tester is the discoverer of any bug.
#[utoipa::path(
    delete,
    path = "/api/testers/{id}",
    tag = "Testers",
    params(("id" = i32, Path, description = "Tester ID")),
    responses(
        (status = 204, description = "Tester deleted"),
        (status = 404, description = "Tester not found", body = ErrorResponse),
        (status = 409, description = "Tester has discovered bugs", body = ErrorResponse),
    )
)]
pub async fn delete_tester(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    pool.delete_tester(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/testers")
            .route(web::get().to(list_testers))
            .route(web::post().to(create_tester)),
    )
    .service(
        web::resource("/testers/{id}")
            .route(web::get().to(get_tester))
            .route(web::delete().to(delete_tester)),
    );
}
