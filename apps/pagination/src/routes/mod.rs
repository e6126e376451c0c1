pub mod health;
pub mod records;

use axum::{http::Uri, routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Demo listing rendered as HTML
        .route("/records", get(records::handle_records))
        // Pagination as JSON for arbitrary totals
        .route("/api/v1/pagination", get(records::handle_pagination))
        .fallback(not_found)
        .with_state(state)
}
