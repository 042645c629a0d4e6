//! Keep courses the learner is ready for.

use crate::traits::MatchRule;
use catalog::{Course, LearnerProfile};

/// Passes a course whose level is at most one step above the learner's.
///
/// Courses at or below the learner's level always pass.
pub struct LevelMatch;

impl MatchRule for LevelMatch {
    fn name(&self) -> &str {
        "LevelMatch"
    }

    fn matches(&self, course: &Course, profile: &LearnerProfile) -> bool {
        course.level.index() <= profile.current_level.index() + 1
    }
}
