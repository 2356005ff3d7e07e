use std::sync::Arc;

use crate::catalog::store::CatalogStore;
use crate::config::Config;
use crate::matching::recommender::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Swappable catalog snapshot. Empty until the startup load lands.
    pub catalog: Arc<CatalogStore>,
    /// Pluggable ranking backend. Default: RuleBasedRecommender.
    pub recommender: Arc<dyn Recommender>,
}
