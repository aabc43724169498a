use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use contracts::usecases::u601_resume_analysis::ANALYZE_PATH;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::system::middleware::request_logger;
use crate::usecases::u601_resume_analysis::AnalysisUpstream;

/// Конфигурация всех роутов приложения
pub fn configure_routes(
    upstream: Arc<AnalysisUpstream>,
    static_dir: &Path,
    max_upload_bytes: usize,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(ANALYZE_PATH, post(handlers::u601_resume_analysis::analyze))
        .with_state(upstream)
        // Собранный фронтенд (trunk build)
        .fallback_service(ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
