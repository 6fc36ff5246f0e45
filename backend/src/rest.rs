use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use shared::{BirthdayQuery, DashboardView, HealthResponse, LogRequest, LogResponse};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

/// API routes plus the built frontend. Unknown paths get `index.html` so the
/// frontend can route `/dashboard` itself.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/dashboard", get(get_dashboard))
        .route("/logs", post(log_message));

    let frontend = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .with_state(state)
}

/// Axum handler function for GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Axum handler function for GET /api/dashboard
///
/// Malformed or missing dates still render, with placeholder values.
/// Parameters are read as raw pairs so repeated keys never reject the request.
pub async fn get_dashboard(Query(pairs): Query<Vec<(String, String)>>) -> impl IntoResponse {
    let query = BirthdayQuery::from_pairs(pairs);
    info!("GET /api/dashboard - query: {:?}", query);

    let resolved = query.resolve();
    if resolved.date.is_none() {
        debug!("No usable birthday in {:?}, rendering placeholders", query.raw());
    }

    (StatusCode::OK, Json(DashboardView::render(&resolved.display)))
}

/// Axum handler function for POST /api/logs
pub async fn log_message(
    State(_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "info" => info!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message), // Default to info for unknown levels
    }

    Json(LogResponse { success: true })
}
