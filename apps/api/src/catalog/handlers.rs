use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::models::ToolRecord;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub tools: usize,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

/// GET /api/tools
pub async fn handle_list_tools(
    State(state): State<AppState>,
) -> Result<Json<Vec<ToolRecord>>, AppError> {
    let catalog = state.catalog.snapshot()?;
    Ok(Json(catalog.records().cloned().collect()))
}

/// GET /api/categories
pub async fn handle_list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let catalog = state.catalog.snapshot()?;
    Ok(Json(catalog.categories()))
}

/// POST /api/catalog/reload
///
/// Re-reads the configured catalog source and swaps it in atomically. A bad file
/// leaves the current snapshot serving.
pub async fn handle_reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, AppError> {
    let catalog = state.catalog.reload().await?;
    Ok(Json(ReloadResponse {
        tools: catalog.len(),
        source: catalog.source.clone(),
        loaded_at: catalog.loaded_at,
    }))
}
