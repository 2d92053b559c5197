pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    // The frontend dev servers run on these two origins
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://localhost:3000"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    // Static segments (stats, dates, date-range) must stay distinct from
    // the :id capture; axum matches them with higher priority.
    Router::new()
        .route("/health", get(health_check))
        .route("/api/sentences", get(routes::sentences::list_all))
        .route("/api/sentences", post(routes::sentences::create))
        .route("/api/sentences/stats", get(routes::sentences::stats))
        .route("/api/sentences/dates", get(routes::sentences::distinct_dates))
        .route(
            "/api/sentences/date-range",
            get(routes::sentences::by_date_range),
        )
        .route(
            "/api/sentences/difficulty/:difficulty",
            get(routes::sentences::by_difficulty),
        )
        .route("/api/sentences/date/:date", get(routes::sentences::by_date))
        .route("/api/sentences/:id", get(routes::sentences::get_by_id))
        .route("/api/sentences/:id", put(routes::sentences::update))
        .route("/api/sentences/:id", delete(routes::sentences::delete))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState { db: Arc::new(db) };
    let app = app(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
