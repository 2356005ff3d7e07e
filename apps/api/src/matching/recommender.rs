//! Recommender — pluggable, trait-based ranking of catalog tools for a profile.
//!
//! Default: `RuleBasedRecommender` (three weighted factors, deterministic, fully testable).
//!
//! `AppState` holds an `Arc<dyn Recommender>`, built at startup from the scoring policy.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::catalog::models::Catalog;
use crate::catalog::store::CatalogStore;
use crate::errors::AppError;
use crate::matching::models::ScoredRecommendation;
use crate::matching::policy::ScoringPolicy;
use crate::matching::profile::{normalize_profile, RawProfile, UserProfile};
use crate::matching::ranker::rank;

/// Implement this to swap ranking backends without touching the endpoint or handler.
///
/// Implementations must be pure over (profile, catalog): no state carried between calls.
/// CPU-bound work belongs on the blocking pool, not the async worker.
#[async_trait]
pub trait Recommender: Send + Sync {
    async fn recommend(
        &self,
        profile: &UserProfile,
        catalog: Arc<Catalog>,
    ) -> anyhow::Result<Vec<ScoredRecommendation>>;

    /// Short label for logs, e.g. "rule_based".
    fn backend(&self) -> &'static str;
}

/// Transparent multi-factor scorer driven by a `ScoringPolicy`.
pub struct RuleBasedRecommender {
    policy: Arc<ScoringPolicy>,
}

impl RuleBasedRecommender {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl Default for RuleBasedRecommender {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}

#[async_trait]
impl Recommender for RuleBasedRecommender {
    async fn recommend(
        &self,
        profile: &UserProfile,
        catalog: Arc<Catalog>,
    ) -> anyhow::Result<Vec<ScoredRecommendation>> {
        // rank fans out on rayon; keep the join off the tokio worker
        let profile = profile.clone();
        let policy = Arc::clone(&self.policy);
        tokio::task::spawn_blocking(move || rank(&profile, &catalog, &policy))
            .await
            .context("Ranking task failed")
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Full request path: normalize → snapshot → rank.
///
/// Validation runs first, so a bad profile is rejected even while the catalog is
/// still loading. An empty `Vec` means "no close match", not an error.
pub async fn recommend_for(
    raw: RawProfile,
    store: &CatalogStore,
    recommender: &dyn Recommender,
) -> Result<Vec<ScoredRecommendation>, AppError> {
    let profile = normalize_profile(raw).map_err(|e| {
        warn!("Rejected profile: {e}");
        AppError::Validation(e)
    })?;

    let catalog = store.snapshot()?;
    let total = catalog.len();
    let results = recommender.recommend(&profile, catalog).await?;

    debug!(
        "Recommended {} of {} tools for {} / {} ({} backend)",
        results.len(),
        total,
        profile.role,
        profile.workflow,
        recommender.backend()
    );

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::loader::CatalogSource;
    use crate::matching::profile::ProfileError;

    fn raw(pains: &[&str]) -> RawProfile {
        RawProfile {
            role: Some("Developer".to_string()),
            workflow: Some("Software Development".to_string()),
            skill_level: Some("advanced".to_string()),
            pain_points: Some(pains.iter().map(|p| p.to_string()).collect()),
        }
    }

    async fn loaded_store() -> CatalogStore {
        let store = CatalogStore::new(CatalogSource::Embedded);
        store.reload().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_recommend_for_valid_profile() {
        let store = loaded_store().await;
        let results = recommend_for(raw(&["Slow coding"]), &store, &RuleBasedRecommender::default())
            .await
            .unwrap();

        assert!(!results.is_empty());
        assert_eq!(results[0].tool.id, "github-copilot");
        // Copilot is intermediate; advanced user gets the simpler-tool credit
        assert_eq!(results[0].score, 95.0);
    }

    #[tokio::test]
    async fn test_validation_runs_before_catalog_lookup() {
        let empty = CatalogStore::new(CatalogSource::Embedded);
        let err = recommend_for(raw(&[]), &empty, &RuleBasedRecommender::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ProfileError::EmptyPainPoints)));
    }

    #[tokio::test]
    async fn test_unloaded_catalog_is_unavailable() {
        let empty = CatalogStore::new(CatalogSource::Embedded);
        let err = recommend_for(raw(&["Slow coding"]), &empty, &RuleBasedRecommender::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CatalogUnavailable));
    }

    #[tokio::test]
    async fn test_no_match_is_empty_success() {
        let store = loaded_store().await;
        let strict = RuleBasedRecommender::new(ScoringPolicy {
            min_score: 100.0,
            ..Default::default()
        });
        let results = recommend_for(raw(&["Fact verification"]), &store, &strict)
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let store = loaded_store().await;
        let recommender: Box<dyn Recommender> = Box::new(RuleBasedRecommender::default());
        assert_eq!(recommender.backend(), "rule_based");

        let catalog = store.snapshot().unwrap();
        let profile = UserProfile::new("Writer", "Writing", "beginner", &["Grammar errors"]).unwrap();
        let results = recommender.recommend(&profile, catalog).await.unwrap();
        assert_eq!(results[0].tool.id, "grammarly");
        assert_eq!(results[0].score, 100.0);
    }

    #[tokio::test]
    async fn test_blocking_pool_ranking_matches_direct_rank() {
        use crate::catalog::models::fixtures::tool;

        let records = (0..500)
            .map(|i| {
                let mut record = tool(&format!("tool-{i}"));
                record.target_workflows = vec!["Software Development".to_string()];
                record.addressed_pain_points = vec!["Slow coding".to_string()];
                record.rating = (i % 50) as f64 / 10.0;
                record
            })
            .collect();
        let catalog = Arc::new(Catalog::new(records, "test"));
        let profile =
            UserProfile::new("Developer", "Software Development", "advanced", &["Slow coding"]).unwrap();

        let recommender = RuleBasedRecommender::default();
        let pooled = recommender.recommend(&profile, Arc::clone(&catalog)).await.unwrap();
        let direct = rank(&profile, &catalog, &ScoringPolicy::default());

        assert_eq!(pooled.len(), 500);
        let ids = |r: &[ScoredRecommendation]| r.iter().map(|s| s.tool.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&pooled), ids(&direct));
    }
}
