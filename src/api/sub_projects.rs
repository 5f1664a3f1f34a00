//! Sub-project API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateSubProjectRequest, ListSubProjectsQuery, SubProjectResponse};

#[utoipa::path(
    get,
    path = "/api/subprojects",
    tag = "Sub-projects",
    params(ListSubProjectsQuery),
    responses(
        (status = 200, description = "Sub-projects", body = [SubProjectResponse]),
    )
)]
pub async fn list_sub_projects(
    pool: web::Data<DbPool>,
    query: web::Query<ListSubProjectsQuery>,
) -> AppResult<HttpResponse> {
    let sub_projects: Vec<SubProjectResponse> = pool
        .list_sub_projects(query.project_id)
        .await?
        .into_iter()
        .map(SubProjectResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(sub_projects))
}

#[utoipa::path(
    post,
    path = "/api/subprojects",
    tag = "Sub-projects",
    request_body = CreateSubProjectRequest,
    responses(
        (status = 201, description = "Sub-project created", body = SubProjectResponse),
        (status = 400, description = "Missing name or project_id", body = ErrorResponse),
        (status = 409, description = "Unknown project", body = ErrorResponse),
    )
)]
pub async fn create_sub_project(
    pool: web::Data<DbPool>,
    body: web::Json<CreateSubProjectRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let sub_project = pool.create_sub_project(new).await?;

    Ok(HttpResponse::Created().json(SubProjectResponse::from(sub_project)))
}

#[utoipa::path(
    get,
    path = "/api/subprojects/{id}",
    tag = "Sub-projects",
    params(("id" = i32, Path, description = "Sub-project ID")),
    responses(
        (status = 200, description = "Sub-project", body = SubProjectResponse),
        (status = 404, description = "Sub-project not found", body = ErrorResponse),
    )
)]
pub async fn get_sub_project(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let sub_project = pool
        .get_sub_project(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sub-project {}", id)))?;

    Ok(HttpResponse::Ok().json(SubProjectResponse::from(sub_project)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/subprojects")
            .route(web::get().to(list_sub_projects))
            .route(web::post().to(create_sub_project)),
    )
    .service(web::resource("/subprojects/{id}").route(web::get().to(get_sub_project)));
}
