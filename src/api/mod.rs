//! API endpoint modules.

pub mod bugs;
pub mod charts;
pub mod executions;
pub mod health;
pub mod openapi;
pub mod projects;
pub mod reports;
pub mod sub_projects;
pub mod test_cases;
pub mod test_suites;
pub mod testers;

use actix_web::{ResponseError, error, web};

use crate::error::AppError;

pub use health::{configure_health_routes, healthz};
pub use openapi::ApiDoc;

/// Register every `/api` resource on a scope.
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_health_routes)
        .configure(projects::configure_routes)
        .configure(sub_projects::configure_routes)
        .configure(testers::configure_routes)
        .configure(test_suites::configure_routes)
        .configure(test_cases::configure_routes)
        .configure(executions::configure_routes)
        .configure(bugs::configure_routes)
        .configure(reports::configure_routes)
        .configure(charts::configure_routes);
}

/// JSON body extractor config: malformed bodies become `{"error": ...}` 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = AppError::InvalidInput(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    })
}

/// Query string extractor config with the same error shape.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let response = AppError::InvalidInput(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    })
}

/// Path extractor config, e.g. `/api/bugs/abc`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = AppError::InvalidInput(err.to_string()).error_response();
        error::InternalError::from_response(err, response).into()
    })
}
