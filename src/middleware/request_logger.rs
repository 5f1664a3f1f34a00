//! Request logging middleware.
//!
//! Emits a debug line when a request arrives and one line when it completes,
//! tagged with the matched route pattern (`/api/bugs/{id}`) so logs group by
//! endpoint rather than by id.

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error;
use actix_web::http::{StatusCode, header};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Request logger middleware factory.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

/// Request logger middleware service.
pub struct RequestLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let origin = req
            .headers()
            .get(header::ORIGIN)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();

        debug!(
            target: "api",
            method = %method,
            path = %path,
            query = %req.query_string(),
            origin = %origin,
            "Request started"
        );

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let route = res.request().match_pattern().unwrap_or_else(|| path.clone());
            log_completion(&method, &path, &route, res.status(), start.elapsed());
            Ok(res)
        })
    }
}

/// Log level follows the status class: 4xx warn, 5xx error.
fn log_completion(method: &str, path: &str, route: &str, status: StatusCode, elapsed: Duration) {
    let status_code = status.as_u16();
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    if status.is_server_error() {
        error!(target: "api", method, path, route, status_code, duration_ms, "Server error");
    } else if status.is_client_error() {
        warn!(target: "api", method, path, route, status_code, duration_ms, "Client error");
    } else {
        info!(target: "api", method, path, route, status_code, duration_ms, "Request completed");
    }
}
