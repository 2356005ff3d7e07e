use serde::Serialize;

use crate::catalog::models::ToolRecord;
use crate::matching::factors::{
    serialize_points, ChallengeMatch, SkillCompatibility, WorkflowMatch,
};

/// Per-factor justification attached to every scored tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoringBreakdown {
    pub workflow_match: WorkflowMatch,
    pub challenge_match: ChallengeMatch,
    pub skill_compatibility: SkillCompatibility,
    #[serde(serialize_with = "serialize_points")]
    pub total_score: f64,
}

/// One ranked result. Built per request and never cached: the same tool scores
/// differently for different profiles.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredRecommendation {
    #[serde(flatten)]
    pub tool: ToolRecord,
    #[serde(serialize_with = "serialize_points")]
    pub score: f64,
    pub explanation: String,
    pub scoring_breakdown: ScoringBreakdown,
}
