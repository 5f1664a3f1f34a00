//! TestTrack server - main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use std::path::PathBuf;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{App, HttpRequest, HttpServer, Result as ActixResult, http::header, web};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use testtrack_lib::api::{self, ApiDoc};
use testtrack_lib::config::Config;
use testtrack_lib::db::{DbPool, seed};
use testtrack_lib::middleware::RequestLogger;

/// SPA fallback handler - serves index.html for client-side routing.
async fn spa_fallback(req: HttpRequest) -> ActixResult<NamedFile> {
    let static_dir = req
        .app_data::<web::Data<PathBuf>>()
        .ok_or_else(|| actix_web::error::ErrorNotFound("Static dir not configured"))?;
    Ok(NamedFile::open(static_dir.join("index.html"))?)
}

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

fn build_cors(origins: &[String]) -> Cors {
    let cors = origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    if std::env::args().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set to a non-default value");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  TestTrack Server");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    info!("Database connection established");

    if let Err(e) = pool.run_migrations().await {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("Database migrations complete");

    if config.seed_data {
        match seed::seed_demo_data(&pool).await {
            Ok(true) => info!("Demo data inserted"),
            Ok(false) => {}
            Err(e) => {
                error!("Failed to seed demo data: {}", e);
                std::process::exit(1);
            }
        }
    }

    let bind_address = config.bind_address();
    let static_dir = config.static_dir.clone();
    let cors_origins = config.cors_origins.clone();
    let openapi = ApiDoc::openapi();

    if let Some(ref dir) = static_dir {
        info!("Static file serving enabled from {:?}", dir);
    }
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, config.workers
    );

    HttpServer::new(move || {
        let mut app = App::new()
            // Add CORS middleware (must be before other middleware)
            .wrap(build_cors(&cors_origins))
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .app_data(api::json_config())
            .app_data(api::query_config())
            .app_data(api::path_config())
            .service(api::healthz)
            .service(web::scope("/api").configure(api::configure_api_routes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            );

        // Serve the frontend bundle when TRACKER_STATIC_DIR is set
        if let Some(ref dir) = static_dir {
            app = app
                .app_data(web::Data::new(dir.clone()))
                .service(Files::new("/assets", dir.join("assets")).prefer_utf8(true))
                // SPA fallback - serve index.html for all other routes
                .default_service(web::route().to(spa_fallback));
        }

        app
    })
    .workers(config.workers)
    .bind(&bind_address)?
    .run()
    .await
}
