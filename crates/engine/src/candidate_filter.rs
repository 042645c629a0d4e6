//! The CandidateFilter selects eligible courses from the catalog.
//!
//! Rules are combined with ANY-OF semantics: a course is a candidate as
//! soon as one rule accepts it. When no course passes any rule the filter
//! falls back to the first `fallback_size` catalog entries, unranked, so a
//! non-empty catalog always yields something to show.

use crate::rules::{InterestMatch, LevelMatch};
use crate::traits::MatchRule;
use catalog::{Course, LearnerProfile};

/// Result of candidate selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// Courses that passed at least one rule, in catalog order
    Candidates(Vec<&'a Course>),
    /// Nothing passed; the head of the catalog, in catalog order
    Fallback(Vec<&'a Course>),
}

impl<'a> Selection<'a> {
    pub fn courses(&self) -> &[&'a Course] {
        match self {
            Selection::Candidates(courses) | Selection::Fallback(courses) => courses,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback(_))
    }
}

/// Combines match rules into a candidate selection step.
///
/// ## Usage
/// ```ignore
/// let filter = CandidateFilter::new(10)
///     .add_rule(InterestMatch)
///     .add_rule(LevelMatch);
///
/// let selection = filter.select(catalog.courses(), &profile);
/// ```
pub struct CandidateFilter {
    rules: Vec<Box<dyn MatchRule>>,
    fallback_size: usize,
}

impl CandidateFilter {
    /// Create a filter without rules.
    ///
    /// A filter without rules accepts nothing and always falls back.
    pub fn new(fallback_size: usize) -> Self {
        Self {
            rules: Vec::new(),
            fallback_size,
        }
    }

    /// The interest-or-level filter used by the recommendation engine.
    pub fn standard(fallback_size: usize) -> Self {
        Self::new(fallback_size)
            .add_rule(InterestMatch)
            .add_rule(LevelMatch)
    }

    /// Add a rule (builder pattern).
    pub fn add_rule(mut self, rule: impl MatchRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Whether any rule accepts `course`.
    pub fn accepts(&self, course: &Course, profile: &LearnerProfile) -> bool {
        self.rules.iter().any(|rule| rule.matches(course, profile))
    }

    /// Select candidates from `courses`, preserving catalog order.
    pub fn select<'a>(&self, courses: &'a [Course], profile: &LearnerProfile) -> Selection<'a> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            for rule in &self.rules {
                let passed = courses
                    .iter()
                    .filter(|course| rule.matches(course, profile))
                    .count();
                tracing::debug!(
                    "Rule {} accepted {} of {} courses",
                    rule.name(),
                    passed,
                    courses.len()
                );
            }
        }

        let candidates: Vec<&Course> = courses
            .iter()
            .filter(|course| self.accepts(course, profile))
            .collect();

        if candidates.is_empty() {
            tracing::warn!(
                "No course passed filtering for interests {:?}; \
                 returning first {} catalog entries unranked",
                profile.interests,
                self.fallback_size.min(courses.len())
            );
            return Selection::Fallback(courses.iter().take(self.fallback_size).collect());
        }

        tracing::debug!("Selected {} candidates", candidates.len());
        Selection::Candidates(candidates)
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::standard(crate::engine::DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course_at_level, course_with_tags};
    use catalog::Level;

    #[test]
    fn test_empty_filter_falls_back() {
        let courses = vec![course_with_tags("a", &["rust"]), course_with_tags("b", &["go"])];
        let filter = CandidateFilter::new(1);

        let selection = filter.select(&courses, &LearnerProfile::new(["rust"]));
        assert!(selection.is_fallback());
        assert_eq!(selection.courses().len(), 1);
        assert_eq!(selection.courses()[0].id, "a");
    }

    #[test]
    fn test_rules_are_any_of() {
        let mut advanced_rust = course_with_tags("advanced-rust", &["rust"]);
        advanced_rust.level = Level::Advanced;
        let courses = vec![
            // interest only
            advanced_rust,
            // level only
            course_at_level("intro-go", Level::Beginner),
            // neither
            course_at_level("hard-go", Level::Advanced),
        ];

        let filter = CandidateFilter::standard(10);
        let profile = LearnerProfile::new(["Rust"]).with_level(Level::Beginner);
        let selection = filter.select(&courses, &profile);

        assert!(!selection.is_fallback());
        let ids: Vec<&str> = selection.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["advanced-rust", "intro-go"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_fallback() {
        let filter = CandidateFilter::default();
        let selection = filter.select(&[], &LearnerProfile::default());
        assert!(selection.is_fallback());
        assert!(selection.courses().is_empty());
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(
            CandidateFilter::standard(10).rule_names(),
            vec!["InterestMatch", "LevelMatch"]
        );
    }
}
