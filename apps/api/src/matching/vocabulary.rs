//! Canonical vocabularies for profile fields. The onboarding form offers exactly these
//! values, and `GET /api/roles` (and friends) serve them back.

pub const ROLES: &[&str] = &[
    "Developer",
    "Designer",
    "Marketer",
    "Writer",
    "Project Manager",
    "Student",
    "Researcher",
    "Business Analyst",
    "Content Creator",
    "Software Engineer",
    "Full Stack Developer",
    "Copywriter",
    "SEO Specialist",
    "Social Media Manager",
    "Small Business Owner",
    "Video Creator",
    "Filmmaker",
    "Journalist",
    "Analyst",
    "Professional",
];

pub const WORKFLOWS: &[&str] = &[
    "Software Development",
    "Content Creation",
    "Marketing",
    "Design",
    "Research",
    "Project Management",
    "Data Analysis",
    "Writing",
    "Video Production",
    "Business Operations",
    "Learning",
    "Customer Support",
];

pub const PAIN_POINTS: &[&str] = &[
    "Writer's block",
    "Slow coding",
    "Design complexity",
    "Time consumption",
    "Creative blocks",
    "Research time",
    "Information overload",
    "Grammar errors",
    "Setup complexity",
    "Learning curve",
    "Debugging time",
    "Content ideas",
    "Brand consistency",
    "Professional look",
    "SEO optimization",
    "High production costs",
    "Technical skills",
    "Environment issues",
    "Source reliability",
    "Fact verification",
];

/// Comparison key: trimmed and lower-cased.
pub fn fold_key(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Looks `value` up case-insensitively, returning its index and canonical spelling.
pub fn canonical(vocabulary: &[&'static str], value: &str) -> Option<(usize, &'static str)> {
    let key = fold_key(value);
    vocabulary
        .iter()
        .position(|term| fold_key(term) == key)
        .map(|idx| (idx, vocabulary[idx]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_restores_spelling() {
        assert_eq!(canonical(ROLES, "  developer "), Some((0, "Developer")));
        assert_eq!(
            canonical(WORKFLOWS, "SOFTWARE DEVELOPMENT"),
            Some((0, "Software Development"))
        );
        assert_eq!(canonical(PAIN_POINTS, "writer's block"), Some((0, "Writer's block")));
    }

    #[test]
    fn test_canonical_rejects_unknown_and_blank() {
        assert_eq!(canonical(ROLES, "Astronaut"), None);
        assert_eq!(canonical(ROLES, "   "), None);
    }

    #[test]
    fn test_vocabularies_have_no_case_duplicates() {
        for vocabulary in [ROLES, WORKFLOWS, PAIN_POINTS] {
            let keys: HashSet<_> = vocabulary.iter().map(|t| fold_key(t)).collect();
            assert_eq!(keys.len(), vocabulary.len());
        }
    }
}
