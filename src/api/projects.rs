//! Project API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{CreateProjectRequest, ProjectResponse, UpdateProjectRequest};

/// List all projects, newest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    responses(
        (status = 200, description = "Projects", body = [ProjectResponse]),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
pub async fn list_projects(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let projects: Vec<ProjectResponse> = pool
        .list_projects()
        .await?
        .into_iter()
        .map(ProjectResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(projects))
}

/// Create a project.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Missing name or invalid dates", body = ErrorResponse),
    )
)]
pub async fn create_project(
    pool: web::Data<DbPool>,
    body: web::Json<CreateProjectRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let project = pool.create_project(new).await?;

    Ok(HttpResponse::Created().json(ProjectResponse::from(project)))
}

/// Get a project by ID.
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
pub async fn get_project(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let project = pool
        .get_project(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {}", id)))?;

    Ok(HttpResponse::Ok().json(ProjectResponse::from(project)))
}

/// Update a project. Only fields present in the body change.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i32, Path, description = "Project ID")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = ProjectResponse),
        (status = 400, description = "Invalid field value", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
pub async fn update_project(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateProjectRequest>,
) -> AppResult<HttpResponse> {
    let patch = body.into_inner().validate()?;
    let project = pool.update_project(path.into_inner(), patch).await?;

    Ok(HttpResponse::Ok().json(ProjectResponse::from(project)))
}

/// Delete a project together with everything that belongs to it.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i32, Path, description = "Project ID")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 404, description = "Project not found", body = ErrorResponse),
    )
)]
pub async fn delete_project(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    pool.delete_project(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(list_projects))
            .route(web::post().to(create_project)),
    )
    .service(
        web::resource("/projects/{id}")
            .route(web::get().to(get_project))
            .route(web::put().to(update_project))
            .route(web::delete().to(delete_project)),
    );
}
