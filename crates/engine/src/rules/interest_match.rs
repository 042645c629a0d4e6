//! Keep courses whose tags overlap the learner's interests.

use crate::normalize::{normalize_all, normalize_interest, tag_matches_any};
use crate::traits::MatchRule;
use catalog::{Course, LearnerProfile};

/// Passes a course when at least one normalized tag matches at least one
/// normalized interest under the three-way substring rule.
///
/// A learner without interests never passes this rule.
pub struct InterestMatch;

impl MatchRule for InterestMatch {
    fn name(&self) -> &str {
        "InterestMatch"
    }

    fn matches(&self, course: &Course, profile: &LearnerProfile) -> bool {
        let interests = normalize_all(&profile.interests);
        if interests.is_empty() {
            return false;
        }
        course
            .tags
            .iter()
            .any(|tag| tag_matches_any(&normalize_interest(tag), &interests))
    }
}
