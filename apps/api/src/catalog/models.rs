use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::fold_key;

/// Ordered skill scale shared by user profiles and catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }

    /// Position on the scale: beginner = 0, advanced = 2.
    pub fn rank(&self) -> i8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
        }
    }

    /// Case-insensitive parse of the wire spelling.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }
}

/// A tool as stored in the catalog file and echoed back in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub target_roles: Vec<String>,
    pub target_workflows: Vec<String>,
    pub skill_level: SkillLevel,
    pub addressed_pain_points: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub pricing_model: String,
    pub official_url: String,
    #[serde(default)]
    pub rating: f64,
}

/// A `ToolRecord` plus case-folded lookup sets built once at load time.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub record: ToolRecord,
    workflow_keys: HashSet<String>,
    pain_point_keys: HashSet<String>,
}

impl CatalogEntry {
    pub fn new(record: ToolRecord) -> Self {
        let workflow_keys = record.target_workflows.iter().map(|w| fold_key(w)).collect();
        let pain_point_keys = record
            .addressed_pain_points
            .iter()
            .map(|p| fold_key(p))
            .collect();
        Self {
            record,
            workflow_keys,
            pain_point_keys,
        }
    }

    pub fn supports_workflow(&self, workflow_key: &str) -> bool {
        self.workflow_keys.contains(workflow_key)
    }

    pub fn addresses(&self, pain_point_key: &str) -> bool {
        self.pain_point_keys.contains(pain_point_key)
    }
}

/// One immutable catalog snapshot. Replaced wholesale on reload, never edited.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(records: Vec<ToolRecord>, source: impl Into<String>) -> Self {
        Self {
            entries: records.into_iter().map(CatalogEntry::new).collect(),
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    /// Entries in catalog insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &ToolRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records()
            .filter(|r| seen.insert(r.category.as_str()))
            .map(|r| r.category.clone())
            .collect()
    }
}
