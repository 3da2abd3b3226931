//! Wardline Ops API
//!
//! Hospital operations backend: authentication, staff presence, patient
//! records, and clinical worklists over REST.
//!
//! ## Endpoints
//!
//! - `POST /register`, `POST /login` - open
//! - `GET /me` - current user
//! - `GET /staff/presence`, `POST /staff/update-status`
//! - `POST /patients`, `GET /patients`
//! - `GET|POST /patients/{id}/vitals`
//! - `GET|POST /patients/{id}/medications`,
//!   `POST /medications/{id}/mark-administered`
//! - `GET|POST /patients/{id}/care-plan`, `POST /care-plan/{id}/status`
//! - `POST /tasks`, `GET /tasks`
//! - `GET /alerts`, `POST /alerts/{id}/acknowledge`
//! - `GET /audit-logs` - admin only
//! - `GET /health`, `GET /ready` - probes
//!
//! Everything except register/login and the probes requires an
//! `Authorization: Bearer <token>` header.

mod audit;
mod config;
mod error;
mod extractors;
mod handlers;
mod monitor;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::connect_info::IntoMakeServiceWithConnectInfo;
use axum::routing::{get, post};
use axum::Router;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use wardline_auth_core::AuthService;
use wardline_db::Repositories;

use crate::config::Config;
use crate::handlers::{health, ready};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("ops_api=debug".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wardline Ops API");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!(http_port = config.http_port, "Configuration loaded");

    // Create database pool
    let pool = wardline_db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Create repositories
    let repos = Repositories::new(pool.clone());

    // Create auth service
    let auth = AuthService::new(config.auth.clone(), Arc::new(repos.users.clone()));

    // Create application state
    let state = AppState::new(auth, repos.clone(), pool, config.clone());

    // Presence sweeps run for the life of the process
    monitor::spawn_monitors(repos);

    // Build HTTP router
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    run_http_server(app, addr).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout();

    // Open routes (no token)
    let open_routes = Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login));

    // Protected routes (bearer token checked in the extractor)
    let protected_routes = Router::new()
        .route("/me", get(handlers::me))
        .route("/staff/presence", get(handlers::staff_presence))
        .route("/staff/update-status", post(handlers::update_status))
        .route(
            "/patients",
            get(handlers::list_patients).post(handlers::create_patient),
        )
        .route(
            "/patients/{id}/vitals",
            get(handlers::list_vitals).post(handlers::record_vitals),
        )
        .route(
            "/patients/{id}/medications",
            get(handlers::list_medications).post(handlers::add_medication),
        )
        .route(
            "/medications/{id}/mark-administered",
            post(handlers::mark_administered),
        )
        .route(
            "/patients/{id}/care-plan",
            get(handlers::list_care_plan).post(handlers::add_care_plan_step),
        )
        .route(
            "/care-plan/{id}/status",
            post(handlers::update_care_plan_status),
        )
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route("/alerts", get(handlers::list_alerts))
        .route(
            "/alerts/{id}/acknowledge",
            post(handlers::acknowledge_alert),
        )
        .route("/audit-logs", get(handlers::list_audit_logs));

    // Health routes (no timeout - must always respond quickly)
    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready));

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        // Request ID propagation (outermost)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        // Tracing with request details
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // Request timeout (innermost - closest to handler)
        .layer(TimeoutLayer::new(request_timeout));

    Router::new()
        .merge(open_routes)
        .merge(protected_routes)
        .layer(middleware)
        .merge(health_routes) // Health routes without timeout
        .with_state(state)
}

async fn run_http_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    tracing::info!("HTTP server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let service: IntoMakeServiceWithConnectInfo<Router, SocketAddr> =
        app.into_make_service_with_connect_info();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
