//! Course Management API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_management_api::domain::gateways::Gateways;
use course_management_api::infrastructure::driven_adapters::config::AppConfig;
use course_management_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use course_management_api::infrastructure::driven_adapters::{
    BcryptPasswordHasher, JwtTokenService, LocalFileStorage, PostgresRepositories,
};
use course_management_api::infrastructure::driving_adapters::api_rest::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to the database")?;
    tracing::info!("Database connection pool created");

    // Run migrations
    run_migrations(&pool).await.context("Failed to run migrations")?;
    tracing::info!("Database migrations completed");

    tokio::fs::create_dir_all(&config.uploads.dir)
        .await
        .with_context(|| format!("Failed to create upload directory {}", config.uploads.dir.display()))?;

    // Wire adapters into the ports the use cases depend on
    let repositories = PostgresRepositories::new(&pool);
    let gateways = Gateways {
        users: repositories.users,
        courses: repositories.courses,
        enrollments: repositories.enrollments,
        assignments: repositories.assignments,
        submissions: repositories.submissions,
        materials: repositories.materials,
        material_storage: Arc::new(LocalFileStorage::new(config.uploads.dir.clone())),
        password_hasher: Arc::new(BcryptPasswordHasher::new(config.auth.bcrypt_cost)),
        token_service: Arc::new(JwtTokenService::new(&config.jwt)),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app_state = AppState::new(Arc::new(config), gateways);

    // Build router
    let app = build_router(app_state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}

/// Initialize tracing; `LOG_FORMAT=json` switches to structured JSON output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "course_management_api=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
