//! The three factor scorers. Each is a pure function of (profile, tool, policy) and
//! returns its points together with the evidence behind them.

use serde::{Serialize, Serializer};

use crate::catalog::models::{CatalogEntry, SkillLevel};
use crate::matching::policy::{FactorWeights, SkillCredit};
use crate::matching::profile::UserProfile;

/// Points are computed at full precision and rounded to one decimal on the wire.
pub(crate) fn serialize_points<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10.0).round() / 10.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkflowMatch {
    #[serde(serialize_with = "serialize_points")]
    pub points: f64,
    pub max: f64,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChallengeMatch {
    #[serde(serialize_with = "serialize_points")]
    pub points: f64,
    pub max: f64,
    pub matched_challenges: usize,
    pub total_challenges: usize,
}

/// How the tool's level relates to the user's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillGap {
    Exact,
    SimplerAdjacent,
    HarderAdjacent,
    /// One step harder and the user is a beginner.
    HarderForBeginner,
    /// Two or more steps apart, either direction.
    Distant,
}

impl SkillGap {
    pub fn between(user: SkillLevel, tool: SkillLevel) -> Self {
        match tool.rank() - user.rank() {
            0 => SkillGap::Exact,
            -1 => SkillGap::SimplerAdjacent,
            1 if user == SkillLevel::Beginner => SkillGap::HarderForBeginner,
            1 => SkillGap::HarderAdjacent,
            _ => SkillGap::Distant,
        }
    }

    fn credit(&self, table: &SkillCredit) -> f64 {
        match self {
            SkillGap::Exact => table.exact,
            SkillGap::SimplerAdjacent => table.simpler_adjacent,
            SkillGap::HarderAdjacent => table.harder_adjacent,
            SkillGap::HarderForBeginner => table.harder_for_beginner,
            SkillGap::Distant => 0.0,
        }
    }
}

/// User-facing label for the skill outcome, used by explanation templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillFit {
    Exact,
    Simpler,
    Stretch,
    Unsuitable,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillCompatibility {
    #[serde(serialize_with = "serialize_points")]
    pub points: f64,
    pub max: f64,
    pub fit: SkillFit,
}

/// Binary: full weight if the tool supports the user's workflow.
pub fn score_workflow(
    profile: &UserProfile,
    entry: &CatalogEntry,
    weights: &FactorWeights,
) -> WorkflowMatch {
    let matched = entry.supports_workflow(profile.workflow_key());
    WorkflowMatch {
        points: if matched { weights.workflow } else { 0.0 },
        max: weights.workflow,
        matched,
    }
}

/// Proportional: weight × (addressed pain points / the user's pain points).
pub fn score_challenges(
    profile: &UserProfile,
    entry: &CatalogEntry,
    weights: &FactorWeights,
) -> ChallengeMatch {
    let total_challenges = profile.challenge_count();
    let matched_challenges = profile
        .pain_point_keys()
        .iter()
        .filter(|key| entry.addresses(key))
        .count();

    let points = if total_challenges == 0 {
        0.0
    } else {
        weights.challenge * matched_challenges as f64 / total_challenges as f64
    };

    ChallengeMatch {
        points,
        max: weights.challenge,
        matched_challenges,
        total_challenges,
    }
}

/// Tiered via the skill credit table.
pub fn score_skill(
    profile: &UserProfile,
    entry: &CatalogEntry,
    weights: &FactorWeights,
    credit: &SkillCredit,
) -> SkillCompatibility {
    let gap = SkillGap::between(profile.skill_level, entry.record.skill_level);
    let points = weights.skill * gap.credit(credit);

    let fit = if points <= 0.0 {
        SkillFit::Unsuitable
    } else {
        match gap {
            SkillGap::Exact => SkillFit::Exact,
            SkillGap::SimplerAdjacent => SkillFit::Simpler,
            SkillGap::HarderAdjacent | SkillGap::HarderForBeginner => SkillFit::Stretch,
            SkillGap::Distant => SkillFit::Unsuitable,
        }
    };

    SkillCompatibility {
        points,
        max: weights.skill,
        fit,
    }
}
