//! Aggregation and ranking.
//!
//! Algorithm:
//! 1. Score every catalog entry on the three factors (parallel, order-preserving collect)
//! 2. total = workflow + challenge + skill, clamped to 0 – 100
//! 3. Drop totals at or below `policy.min_score`
//! 4. Stable sort: score desc, then rating desc, then catalog order
//! 5. Apply `policy.max_results`, then render explanations for the survivors

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::catalog::models::{Catalog, CatalogEntry};
use crate::matching::explain::explain;
use crate::matching::factors::{score_challenges, score_skill, score_workflow};
use crate::matching::models::{ScoredRecommendation, ScoringBreakdown};
use crate::matching::policy::ScoringPolicy;
use crate::matching::profile::UserProfile;

pub fn score_entry(
    profile: &UserProfile,
    entry: &CatalogEntry,
    policy: &ScoringPolicy,
) -> ScoringBreakdown {
    let workflow_match = score_workflow(profile, entry, &policy.weights);
    let challenge_match = score_challenges(profile, entry, &policy.weights);
    let skill_compatibility = score_skill(profile, entry, &policy.weights, &policy.skill_credit);

    let total_score = (workflow_match.points + challenge_match.points + skill_compatibility.points)
        .clamp(0.0, 100.0);

    ScoringBreakdown {
        workflow_match,
        challenge_match,
        skill_compatibility,
        total_score,
    }
}

/// Result order: higher score first, then higher rating. Ties beyond that keep
/// catalog order because the sort is stable.
fn by_rank(a: &(ScoringBreakdown, &CatalogEntry), b: &(ScoringBreakdown, &CatalogEntry)) -> Ordering {
    b.0.total_score
        .total_cmp(&a.0.total_score)
        .then_with(|| b.1.record.rating.total_cmp(&a.1.record.rating))
}

/// Scores the whole catalog against `profile`. An empty result is a valid outcome.
pub fn rank(
    profile: &UserProfile,
    catalog: &Catalog,
    policy: &ScoringPolicy,
) -> Vec<ScoredRecommendation> {
    let mut scored: Vec<(ScoringBreakdown, &CatalogEntry)> = catalog
        .entries()
        .par_iter()
        .map(|entry| (score_entry(profile, entry, policy), entry))
        .collect();

    scored.retain(|(breakdown, _)| breakdown.total_score > policy.min_score);
    scored.sort_by(by_rank);
    if let Some(limit) = policy.max_results {
        scored.truncate(limit);
    }

    scored
        .into_iter()
        .map(|(breakdown, entry)| ScoredRecommendation {
            tool: entry.record.clone(),
            score: breakdown.total_score,
            explanation: explain(profile, &breakdown),
            scoring_breakdown: breakdown,
        })
        .collect()
}
