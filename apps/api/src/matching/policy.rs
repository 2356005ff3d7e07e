//! Scoring policy: factor weights, the skill credit table, and result filtering.
//!
//! Defaults: workflow 40, challenge 40, skill 20. Loadable from JSON so scoring
//! can be tuned and tested without touching catalog content.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// Point budget per factor. Must sum to 100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub workflow: f64,
    pub challenge: f64,
    pub skill: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            workflow: 40.0,
            challenge: 40.0,
            skill: 20.0,
        }
    }
}

impl FactorWeights {
    pub fn total(&self) -> f64 {
        self.workflow + self.challenge + self.skill
    }
}

/// Fraction of the skill weight granted for each relation between the user's level
/// and the tool's level. Two or more steps apart always earns nothing.
///
/// The table is asymmetric: a tool one step simpler than the user earns
/// more than one a step harder, and a beginner earns nothing for a harder tool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkillCredit {
    pub exact: f64,
    pub simpler_adjacent: f64,
    pub harder_adjacent: f64,
    pub harder_for_beginner: f64,
}

impl Default for SkillCredit {
    fn default() -> Self {
        Self {
            exact: 1.0,
            simpler_adjacent: 0.75,
            harder_adjacent: 0.5,
            harder_for_beginner: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub weights: FactorWeights,
    pub skill_credit: SkillCredit,
    /// Tools scoring at or below this are dropped.
    pub min_score: f64,
    /// Cap on returned results; `None` returns every tool above the threshold.
    pub max_results: Option<usize>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            skill_credit: SkillCredit::default(),
            min_score: 0.0,
            max_results: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("{factor} weight must be a non-negative number, got {value}")]
    NegativeWeight { factor: &'static str, value: f64 },

    #[error("factor weights must sum to 100, got {0}")]
    WeightsSum(f64),

    #[error("skill credit '{tier}' must be within 0.0 – 1.0, got {value}")]
    CreditOutOfRange { tier: &'static str, value: f64 },

    #[error("skill credit '{higher}' ({higher_value}) must not be below '{lower}' ({lower_value})")]
    CreditOrder {
        higher: &'static str,
        higher_value: f64,
        lower: &'static str,
        lower_value: f64,
    },

    #[error("min_score must be within 0 – 100, got {0}")]
    ThresholdOutOfRange(f64),
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl ScoringPolicy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        let weights = [
            ("workflow", self.weights.workflow),
            ("challenge", self.weights.challenge),
            ("skill", self.weights.skill),
        ];
        for (factor, value) in weights {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(PolicyError::NegativeWeight { factor, value });
            }
        }

        let total = self.weights.total();
        if (total - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(PolicyError::WeightsSum(total));
        }

        let credits = [
            ("exact", self.skill_credit.exact),
            ("simpler_adjacent", self.skill_credit.simpler_adjacent),
            ("harder_adjacent", self.skill_credit.harder_adjacent),
            ("harder_for_beginner", self.skill_credit.harder_for_beginner),
        ];
        for (tier, value) in credits {
            if !(0.0..=1.0).contains(&value) {
                return Err(PolicyError::CreditOutOfRange { tier, value });
            }
        }
        // Tiers run from best fit to worst; a file may flatten them but not invert them.
        for pair in credits.windows(2) {
            let ((higher, higher_value), (lower, lower_value)) = (pair[0], pair[1]);
            if higher_value < lower_value {
                return Err(PolicyError::CreditOrder {
                    higher,
                    higher_value,
                    lower,
                    lower_value,
                });
            }
        }

        if !(0.0..=100.0).contains(&self.min_score) {
            return Err(PolicyError::ThresholdOutOfRange(self.min_score));
        }

        Ok(())
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let policy: ScoringPolicy =
            serde_json::from_str(raw).context("Scoring policy is not valid JSON")?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring policy {}", path.display()))?;
        Self::from_json(&raw)
    }

    /// Policy file (if configured) with `MIN_SCORE` / `MAX_RESULTS` overrides applied.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut policy = match &config.scoring_policy_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(min_score) = config.min_score {
            policy.min_score = min_score;
        }
        if let Some(max_results) = config.max_results {
            // 0 means "no cap"
            policy.max_results = (max_results > 0).then_some(max_results);
        }

        policy.validate()?;
        Ok(policy)
    }
}
