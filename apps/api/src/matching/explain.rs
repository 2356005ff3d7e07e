//! Explanation text, assembled from fixed clause tables keyed by factor outcome.
//! Identical breakdowns always yield identical sentences.

use crate::matching::factors::SkillFit;
use crate::matching::models::ScoringBreakdown;
use crate::matching::profile::UserProfile;

const SENTENCE: &str = "This tool {workflow_clause}, {challenge_clause}, and {skill_clause}.";

/// Keyed by whether the workflow matched.
const WORKFLOW_CLAUSES: &[(bool, &str)] = &[
    (true, "matches your {workflow} workflow"),
    (false, "doesn't match your {workflow} workflow"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChallengeCoverage {
    Zero,
    Partial,
    All,
}

impl ChallengeCoverage {
    fn of(matched: usize, total: usize) -> Self {
        match matched {
            0 => ChallengeCoverage::Zero,
            m if m >= total => ChallengeCoverage::All,
            _ => ChallengeCoverage::Partial,
        }
    }
}

const CHALLENGE_CLAUSES: &[(ChallengeCoverage, &str)] = &[
    (ChallengeCoverage::All, "solves all {total} of your selected challenges"),
    (ChallengeCoverage::Partial, "solves {matched} of your {total} selected challenges"),
    (ChallengeCoverage::Zero, "addresses none of your {total} selected challenges"),
];

const SKILL_CLAUSES: &[(SkillFit, &str)] = &[
    (SkillFit::Exact, "is suitable for {skill} skill level"),
    (SkillFit::Simpler, "is easy to pick up at {skill} skill level"),
    (SkillFit::Stretch, "is challenging but possible for {skill} skill level"),
    (SkillFit::Unsuitable, "is not suitable for {skill} skill level"),
];

fn clause<K: PartialEq + Copy>(table: &[(K, &'static str)], key: K) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, template)| *template)
        .unwrap_or_default()
}

fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), value)
    })
}

pub fn explain(profile: &UserProfile, breakdown: &ScoringBreakdown) -> String {
    let challenge = &breakdown.challenge_match;
    let workflow = profile.workflow.to_lowercase();
    let matched = challenge.matched_challenges.to_string();
    let total = challenge.total_challenges.to_string();
    let vars = [
        ("workflow", workflow.as_str()),
        ("matched", matched.as_str()),
        ("total", total.as_str()),
        ("skill", profile.skill_level.as_str()),
    ];

    let workflow_clause = fill(
        clause(WORKFLOW_CLAUSES, breakdown.workflow_match.matched),
        &vars,
    );
    let challenge_clause = fill(
        clause(
            CHALLENGE_CLAUSES,
            ChallengeCoverage::of(challenge.matched_challenges, challenge.total_challenges),
        ),
        &vars,
    );
    let skill_clause = fill(
        clause(SKILL_CLAUSES, breakdown.skill_compatibility.fit),
        &vars,
    );

    fill(
        SENTENCE,
        &[
            ("workflow_clause", workflow_clause.as_str()),
            ("challenge_clause", challenge_clause.as_str()),
            ("skill_clause", skill_clause.as_str()),
        ],
    )
}
