use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health, GET /api/health
/// Liveness plus whether a catalog snapshot is serving yet. Always 200.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "toolfinder-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "catalog_loaded": state.catalog.is_loaded(),
        "catalog_source": state.config.catalog_source().label()
    }))
}
