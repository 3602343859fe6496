pub mod api;
pub mod estimator;
pub mod price;

use axum::Router;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{error::AppError, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    Router::new()
        .merge(estimator::router())
        .merge(price::router())
        .nest("/api", api::router())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
