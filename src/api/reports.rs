//! Report API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppResult, ErrorResponse};
use crate::models::{
    DEFAULT_REPORT_DAYS, ProjectBugSummary, RecentBug, SuiteExecutionSummary, TesterBugSummary,
    UnassignedBug, WindowQuery,
};

/// Test case and execution totals per suite.
#[utoipa::path(
    get,
    path = "/api/reports/test-executions-by-suite",
    tag = "Reports",
    params(WindowQuery),
    responses(
        (status = 200, description = "One row per suite", body = [SuiteExecutionSummary]),
        (status = 400, description = "days out of range", body = ErrorResponse),
    )
)]
pub async fn test_executions_by_suite(
    pool: web::Data<DbPool>,
    query: web::Query<WindowQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days_or(DEFAULT_REPORT_DAYS)?;
    let rows = pool.test_executions_by_suite(days).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Bug counts per sub-project of every active project.
#[utoipa::path(
    get,
    path = "/api/reports/projects-with-bugs",
    tag = "Reports",
    responses(
        (status = 200, description = "One row per project and sub-project", body = [ProjectBugSummary]),
    )
)]
pub async fn projects_with_bugs(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.projects_with_bugs().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Assignment totals per tester.
#[utoipa::path(
    get,
    path = "/api/reports/bugs-per-tester",
    tag = "Reports",
    params(WindowQuery),
    responses(
        (status = 200, description = "One row per tester", body = [TesterBugSummary]),
        (status = 400, description = "days out of range", body = ErrorResponse),
    )
)]
pub async fn bugs_per_tester(
    pool: web::Data<DbPool>,
    query: web::Query<WindowQuery>,
) -> AppResult<HttpResponse> {
    let days = query.days_or(DEFAULT_REPORT_DAYS)?;
    let rows = pool.bugs_per_tester(days).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Bugs discovered during the last seven days.
#[utoipa::path(
    get,
    path = "/api/reports/bugs-discovered-last-week",
    tag = "Reports",
    responses(
        (status = 200, description = "Recent bugs, newest first", body = [RecentBug]),
    )
)]
pub async fn bugs_discovered_last_week(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.bugs_discovered_last_week().await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Bugs without an assignee, most urgent first.
#[utoipa::path(
    get,
    path = "/api/reports/unassigned-bugs",
    tag = "Reports",
    responses(
        (status = 200, description = "Unassigned bugs", body = [UnassignedBug]),
    )
)]
pub async fn unassigned_bugs(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = pool.unassigned_bugs().await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route(
                "/test-executions-by-suite",
                web::get().to(test_executions_by_suite),
            )
            .route("/projects-with-bugs", web::get().to(projects_with_bugs))
            .route("/bugs-per-tester", web::get().to(bugs_per_tester))
            .route(
                "/bugs-discovered-last-week",
                web::get().to(bugs_discovered_last_week),
            )
            .route("/unassigned-bugs", web::get().to(unassigned_bugs)),
    );
}
