pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::health_handler))
        // Recommendation API
        .route("/api/recommend", post(matching::handle_recommend))
        .route("/api/roles", get(matching::handle_roles))
        .route("/api/workflows", get(matching::handle_workflows))
        .route("/api/pain-points", get(matching::handle_pain_points))
        // Catalog API
        .route("/api/tools", get(catalog::handle_list_tools))
        .route("/api/categories", get(catalog::handle_list_categories))
        .route("/api/catalog/reload", post(catalog::handle_reload))
        .with_state(state)
}
