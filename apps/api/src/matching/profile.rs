//! Profile normalization — turns the onboarding form body into a `UserProfile`.
//!
//! Every field is required. Nothing is defaulted: a missing or unrecognized value is a
//! `ProfileError`, raised before any scoring work starts.

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::models::SkillLevel;
use crate::matching::vocabulary::{canonical, fold_key, PAIN_POINTS, ROLES, WORKFLOWS};

/// Request body as sent by the onboarding form. All fields optional here so that a
/// missing one is reported by name instead of as a generic JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub workflow: Option<String>,
    #[serde(default)]
    pub skill_level: Option<String>,
    #[serde(default)]
    pub pain_points: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("'{value}' is not a recognized {field} value")]
    UnknownValue { field: &'static str, value: String },

    #[error("select at least one pain point")]
    EmptyPainPoints,
}

impl ProfileError {
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::MissingField { field } | ProfileError::UnknownValue { field, .. } => {
                *field
            }
            ProfileError::EmptyPainPoints => "pain_points",
        }
    }

    /// Machine-readable reason code for API clients.
    pub fn reason(&self) -> &'static str {
        match self {
            ProfileError::MissingField { .. } => "missing_field",
            ProfileError::UnknownValue { .. } => "unknown_value",
            ProfileError::EmptyPainPoints => "empty_pain_points",
        }
    }
}

/// A validated profile. Strings carry the vocabulary's canonical spelling, and
/// pain points are unique and kept in vocabulary order.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub role: String,
    pub workflow: String,
    pub skill_level: SkillLevel,
    pub pain_points: Vec<String>,
    workflow_key: String,
    pain_point_keys: Vec<String>,
}

#[cfg(test)]
impl UserProfile {
    pub fn new(
        role: &str,
        workflow: &str,
        skill_level: &str,
        pain_points: &[&str],
    ) -> Result<Self, ProfileError> {
        normalize_profile(RawProfile {
            role: Some(role.to_string()),
            workflow: Some(workflow.to_string()),
            skill_level: Some(skill_level.to_string()),
            pain_points: Some(pain_points.iter().map(|p| p.to_string()).collect()),
        })
    }
}

impl UserProfile {
    pub fn workflow_key(&self) -> &str {
        &self.workflow_key
    }

    pub fn pain_point_keys(&self) -> &[String] {
        &self.pain_point_keys
    }

    /// Number of distinct pain points. Never zero for a normalized profile.
    pub fn challenge_count(&self) -> usize {
        self.pain_points.len()
    }
}

pub fn normalize_profile(raw: RawProfile) -> Result<UserProfile, ProfileError> {
    let role = required_term("role", raw.role.as_deref(), ROLES)?;
    let workflow = required_term("workflow", raw.workflow.as_deref(), WORKFLOWS)?;

    let skill_text = required("skill_level", raw.skill_level.as_deref())?;
    let skill_level = SkillLevel::parse(skill_text).ok_or_else(|| ProfileError::UnknownValue {
        field: "skill_level",
        value: skill_text.to_string(),
    })?;

    let raw_pain_points = raw.pain_points.ok_or(ProfileError::MissingField {
        field: "pain_points",
    })?;
    if raw_pain_points.is_empty() {
        return Err(ProfileError::EmptyPainPoints);
    }

    let mut indexed = Vec::with_capacity(raw_pain_points.len());
    for value in &raw_pain_points {
        let term = canonical(PAIN_POINTS, value).ok_or_else(|| ProfileError::UnknownValue {
            field: "pain_points",
            value: value.trim().to_string(),
        })?;
        indexed.push(term);
    }
    indexed.sort_unstable_by_key(|(idx, _)| *idx);
    indexed.dedup_by_key(|(idx, _)| *idx);

    let pain_points: Vec<String> = indexed.iter().map(|(_, t)| t.to_string()).collect();
    let pain_point_keys = pain_points.iter().map(|p| fold_key(p)).collect();

    Ok(UserProfile {
        role: role.to_string(),
        workflow_key: fold_key(workflow),
        workflow: workflow.to_string(),
        skill_level,
        pain_points,
        pain_point_keys,
    })
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ProfileError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ProfileError::MissingField { field }),
    }
}

fn required_term(
    field: &'static str,
    value: Option<&str>,
    vocabulary: &[&'static str],
) -> Result<&'static str, ProfileError> {
    let value = required(field, value)?;
    canonical(vocabulary, value)
        .map(|(_, term)| term)
        .ok_or_else(|| ProfileError::UnknownValue {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(role: &str, workflow: &str, skill: &str, pains: &[&str]) -> RawProfile {
        RawProfile {
            role: Some(role.to_string()),
            workflow: Some(workflow.to_string()),
            skill_level: Some(skill.to_string()),
            pain_points: Some(pains.iter().map(|p| p.to_string()).collect()),
        }
    }

    #[test]
    fn test_valid_profile_is_canonicalized() {
        let profile = normalize_profile(raw(
            "  developer",
            "software development ",
            "ADVANCED",
            &["slow coding"],
        ))
        .unwrap();

        assert_eq!(profile.role, "Developer");
        assert_eq!(profile.workflow, "Software Development");
        assert_eq!(profile.skill_level, SkillLevel::Advanced);
        assert_eq!(profile.pain_points, vec!["Slow coding"]);
        assert_eq!(profile.workflow_key(), "software development");
    }

    #[test]
    fn test_pain_points_deduplicated_in_vocabulary_order() {
        let profile = normalize_profile(raw(
            "Writer",
            "Writing",
            "beginner",
            &["Grammar errors", "writer's block", "GRAMMAR ERRORS", "Writer's block"],
        ))
        .unwrap();

        assert_eq!(profile.pain_points, vec!["Writer's block", "Grammar errors"]);
        assert_eq!(profile.challenge_count(), 2);
    }

    #[test]
    fn test_missing_role_rejected() {
        let mut body = raw("Developer", "Design", "beginner", &["Slow coding"]);
        body.role = None;
        let err = normalize_profile(body).unwrap_err();
        assert_eq!(err, ProfileError::MissingField { field: "role" });
        assert_eq!(err.reason(), "missing_field");
    }

    #[test]
    fn test_blank_workflow_rejected() {
        let err = normalize_profile(raw("Developer", "   ", "beginner", &["Slow coding"]))
            .unwrap_err();
        assert_eq!(err.field(), "workflow");
        assert_eq!(err.reason(), "missing_field");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = normalize_profile(raw("Astronaut", "Design", "beginner", &["Slow coding"]))
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::UnknownValue {
                field: "role",
                value: "Astronaut".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_skill_level_rejected() {
        let err = normalize_profile(raw("Developer", "Design", "expert", &["Slow coding"]))
            .unwrap_err();
        assert_eq!(err.field(), "skill_level");
        assert_eq!(err.reason(), "unknown_value");
    }

    #[test]
    fn test_empty_pain_points_rejected() {
        let err = normalize_profile(raw("Developer", "Design", "beginner", &[])).unwrap_err();
        assert_eq!(err, ProfileError::EmptyPainPoints);
        assert_eq!(err.field(), "pain_points");
    }

    #[test]
    fn test_missing_pain_points_rejected() {
        let mut body = raw("Developer", "Design", "beginner", &[]);
        body.pain_points = None;
        let err = normalize_profile(body).unwrap_err();
        assert_eq!(err.reason(), "missing_field");
    }

    #[test]
    fn test_unknown_or_blank_pain_point_rejected() {
        let err = normalize_profile(raw("Developer", "Design", "beginner", &["Slow coding", "Boredom"]))
            .unwrap_err();
        assert_eq!(err.reason(), "unknown_value");

        let err = normalize_profile(raw("Developer", "Design", "beginner", &["  "])).unwrap_err();
        assert_eq!(err.field(), "pain_points");
    }

    #[test]
    fn test_raw_profile_accepts_partial_json() {
        let body: RawProfile = serde_json::from_str(r#"{"role": "Developer"}"#).unwrap();
        assert!(body.workflow.is_none());
        let err = normalize_profile(body).unwrap_err();
        assert_eq!(err, ProfileError::MissingField { field: "workflow" });
    }
}
