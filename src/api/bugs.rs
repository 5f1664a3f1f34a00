//! Bug API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult, ErrorResponse};
use crate::models::{BugResponse, CreateBugRequest, ListBugsQuery, UpdateBugRequest};

/// List bugs, newest first.
#[utoipa::path(
    get,
    path = "/api/bugs",
    tag = "Bugs",
    params(ListBugsQuery),
    responses(
        (status = 200, description = "Bugs", body = [BugResponse]),
        (status = 400, description = "Unknown status or severity filter", body = ErrorResponse),
    )
)]
pub async fn list_bugs(
    pool: web::Data<DbPool>,
    query: web::Query<ListBugsQuery>,
) -> AppResult<HttpResponse> {
    query.validate()?;

    let bugs: Vec<BugResponse> = pool
        .list_bugs(&query)
        .await?
        .into_iter()
        .map(BugResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(bugs))
}

/// File a bug.
#[utoipa::path(
    post,
    path = "/api/bugs",
    tag = "Bugs",
    request_body = CreateBugRequest,
    responses(
        (status = 201, description = "Bug created", body = BugResponse),
        (status = 400, description = "Missing field or unknown enum value", body = ErrorResponse),
        (status = 409, description = "Unknown project, tester, sub-project or test case", body = ErrorResponse),
    )
)]
pub async fn create_bug(
    pool: web::Data<DbPool>,
    body: web::Json<CreateBugRequest>,
) -> AppResult<HttpResponse> {
    let new = body.into_inner().validate()?;
    let bug = pool.create_bug(new).await?;

    Ok(HttpResponse::Created().json(BugResponse::from(bug)))
}

#[utoipa::path(
    get,
    path = "/api/bugs/{id}",
    tag = "Bugs",
    params(("id" = i32, Path, description = "Bug ID")),
    responses(
        (status = 200, description = "Bug", body = BugResponse),
        (status = 404, description = "Bug not found", body = ErrorResponse),
    )
)]
pub async fn get_bug(pool: web::Data<DbPool>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let bug = pool
        .get_bug(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Bug {}", id)))?;

    Ok(HttpResponse::Ok().json(BugResponse::from(bug)))
}

/// Partially update a bug.
///
/// Assigning a new tester stamps `assigned_date`; moving to Closed or
/// Verified stamps `resolution_date`. Only changes stamp: resending the
/// current assignee, or Closed to an already closed bug, keeps the existing
/// timestamps. Clearing the assignee or reopening keeps them too.
#[utoipa::path(
    put,
    path = "/api/bugs/{id}",
    tag = "Bugs",
    params(("id" = i32, Path, description = "Bug ID")),
    request_body = UpdateBugRequest,
    responses(
        (status = 200, description = "Updated bug", body = BugResponse),
        (status = 400, description = "Unknown enum value", body = ErrorResponse),
        (status = 404, description = "Bug not found", body = ErrorResponse),
        (status = 409, description = "Unknown referenced record", body = ErrorResponse),
    )
)]
pub async fn update_bug(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateBugRequest>,
) -> AppResult<HttpResponse> {
    let patch = body.into_inner().validate()?;
    let bug = pool.update_bug(path.into_inner(), patch).await?;

    Ok(HttpResponse::Ok().json(BugResponse::from(bug)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bugs")
            .route(web::get().to(list_bugs))
            .route(web::post().to(create_bug)),
    )
    .service(
        web::resource("/bugs/{id}")
            .route(web::get().to(get_bug))
            .route(web::put().to(update_bug)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

    use crate::entity::bug;

    fn sample_bug() -> bug::Model {
        bug::Model {
            bug_id: 3,
            project_id: 1,
            sub_project_id: Some(1),
            test_case_id: None,
            discovered_by: 1,
            assigned_to: None,
            name: "Payment fails".to_string(),
            description: None,
            steps_to_reproduce: None,
            status: "New".to_string(),
            severity: "High".to_string(),
            priority: "P1".to_string(),
            bug_type: "Functional".to_string(),
            environment: None,
            discovered_date: Utc::now(),
            assigned_date: None,
            resolution_date: None,
        }
    }

    macro_rules! bug_app {
        ($conn:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(DbPool::from_connection($conn)))
                    .app_data(crate::api::json_config())
                    .app_data(crate::api::query_config())
                    .app_data(crate::api::path_config())
                    .service(web::scope("/api").configure(configure_routes)),
            )
            .await
        };
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    #[actix_rt::test]
    async fn test_get_missing_bug_is_404() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<bug::Model>::new()])
            .into_connection();
        let app = bug_app!(conn);

        let req = test::TestRequest::get().uri("/api/bugs/77").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({"error": "Bug 77 not found"}));
    }

    #[actix_rt::test]
    async fn test_list_returns_type_field() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_bug()]])
            .into_connection();
        let app = bug_app!(conn);

        let req = test::TestRequest::get().uri("/api/bugs?project_id=1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body[0]["type"], "Functional");
        assert_eq!(body[0]["status"], "New");
        assert!(body[0]["assigned_date"].is_null());
    }

    #[actix_rt::test]
    async fn test_create_with_unknown_severity_is_400() {
        let app = bug_app!(empty_db());

        let req = test::TestRequest::post()
            .uri("/api/bugs")
            .set_json(serde_json::json!({
                "project_id": 1,
                "discovered_by": 1,
                "name": "Crash",
                "severity": "Blocker",
                "priority": "P1"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_malformed_json_is_400_with_error_body() {
        let app = bug_app!(empty_db());

        let req = test::TestRequest::post()
            .uri("/api/bugs")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid input"));
    }

    #[actix_rt::test]
    async fn test_non_numeric_id_is_400() {
        let app = bug_app!(empty_db());

        let req = test::TestRequest::get().uri("/api/bugs/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_unknown_status_filter_is_400() {
        let app = bug_app!(empty_db());

        let req = test::TestRequest::get().uri("/api/bugs?status=Done").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_empty_update_returns_current_bug() {
        let conn = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_bug()]])
            .into_connection();
        let app = bug_app!(conn);

        let req = test::TestRequest::put()
            .uri("/api/bugs/3")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["bug_id"], 3);
    }
}
