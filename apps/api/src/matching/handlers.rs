//! Axum route handlers for the Recommendation API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::matching::models::ScoredRecommendation;
use crate::matching::profile::RawProfile;
use crate::matching::recommender::recommend_for;
use crate::matching::vocabulary::{PAIN_POINTS, ROLES, WORKFLOWS};
use crate::state::AppState;

/// POST /api/recommend
///
/// Ranks the catalog for the submitted onboarding profile. `[]` means no tool cleared
/// the threshold; the client shows its own fallback in that case.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RawProfile>, JsonRejection>,
) -> Result<Json<Vec<ScoredRecommendation>>, AppError> {
    let Json(raw) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let results = recommend_for(raw, &state.catalog, state.recommender.as_ref()).await?;
    Ok(Json(results))
}

/// GET /api/roles
pub async fn handle_roles() -> Json<&'static [&'static str]> {
    Json(ROLES)
}

/// GET /api/workflows
pub async fn handle_workflows() -> Json<&'static [&'static str]> {
    Json(WORKFLOWS)
}

/// GET /api/pain-points
pub async fn handle_pain_points() -> Json<&'static [&'static str]> {
    Json(PAIN_POINTS)
}
