//! Chart API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppResult, ErrorResponse};
use crate::models::{
    BugPriorityCount, BugSeverityCount, BugStatusCount, ClosedIssuesPoint, DEFAULT_CHART_DAYS,
    ExecutionStatusCount, OpenIssuesPoint, WindowQuery,
};

/// Open bugs per project and discovery day.
#[utoipa::path(
    get,
    path = "/api/charts/open-issues-by-project",
    tag = "Charts",
    params(WindowQuery),
    responses(
        (status = 200, description = "Daily open issue counts", body = [OpenIssuesPoint]),
        (status = 400, description = "days out of range", body = ErrorResponse),
    )
)]
pub async fn open_issues_by_project(
    pool: web::Data<DbPool>,
    query: web::Query<WindowQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days_or(DEFAULT_CHART_DAYS)?;
    let rows = pool.open_issues_by_project(days).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Resolved bugs per project and resolution day.
#[utoipa::path(
    get,
    path = "/api/charts/closed-issues-by-project",
    tag = "Charts",
    params(WindowQuery),
    responses(
        (status = 200, description = "Daily closed issue counts", body = [ClosedIssuesPoint]),
        (status = 400, description = "days out of range", body = ErrorResponse),
    )
)]
pub async fn closed_issues_by_project(
    pool: web::Data<DbPool>,
    query: web::Query<WindowQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days_or(DEFAULT_CHART_DAYS)?;
    let rows = pool.closed_issues_by_project(days).await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    get,
    path = "/api/charts/bug-status-distribution",
    tag = "Charts",
    responses(
        (status = 200, description = "Bug count per status", body = [BugStatusCount]),
    )
)]
pub async fn bug_status_distribution(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.bug_status_distribution().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    get,
    path = "/api/charts/bug-severity-distribution",
    tag = "Charts",
    responses(
        (status = 200, description = "Bug count per severity", body = [BugSeverityCount]),
    )
)]
pub async fn bug_severity_distribution(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.bug_severity_distribution().await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
    get,
    path = "/api/charts/bug-priority-distribution",
    tag = "Charts",
    responses(
        (status = 200, description = "Bug count per priority", body = [BugPriorityCount]),
    )
)]
pub async fn bug_priority_distribution(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.bug_priority_distribution().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Execution outcomes within the window.
#[utoipa::path(
    get,
    path = "/api/charts/execution-status-distribution",
    tag = "Charts",
    params(WindowQuery),
    responses(
        (status = 200, description = "Execution count per status", body = [ExecutionStatusCount]),
        (status = 400, description = "days out of range", body = ErrorResponse),
    )
)]
pub async fn execution_status_distribution(
    pool: web::Data<DbPool>,
    query: web::Query<WindowQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days_or(DEFAULT_CHART_DAYS)?;
    let rows = pool.execution_status_distribution(days).await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/charts")
            .route("/open-issues-by-project", web::get().to(open_issues_by_project))
            .route(
                "/closed-issues-by-project",
                web::get().to(closed_issues_by_project),
            )
            .route(
                "/bug-status-distribution",
                web::get().to(bug_status_distribution),
            )
            .route(
                "/bug-severity-distribution",
                web::get().to(bug_severity_distribution),
            )
            .route(
                "/bug-priority-distribution",
                web::get().to(bug_priority_distribution),
            )
            .route(
                "/execution-status-distribution",
                web::get().to(execution_status_distribution),
            ),
    );
}
