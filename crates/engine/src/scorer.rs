//! Relevance scoring for candidate courses.
//!
//! The score is a weighted sum of four components:
//!
//! | component | max | rule |
//! |-----------|-----|------|
//! | interest  | 40  | share of the course's tags that match an interest |
//! | level     | 30  | 30 for same level or one above, 20 for one below |
//! | duration  | 20  | 20 if the course fits the learner's time, else 10 |
//! | rating    | 10  | rating / 5 * 10 |

use crate::normalize::{normalize_all, normalize_interest, tag_matches_any};
use catalog::{Course, LearnerProfile};
use rayon::prelude::*;
use serde::Serialize;

pub const INTEREST_WEIGHT: f32 = 40.0;
pub const LEVEL_WEIGHT: f32 = 30.0;
pub const ADJACENT_LEVEL_WEIGHT: f32 = 20.0;
pub const DURATION_FIT_WEIGHT: f32 = 20.0;
pub const DURATION_MISFIT_WEIGHT: f32 = 10.0;
pub const RATING_WEIGHT: f32 = 10.0;

const MAX_RATING: f32 = 5.0;

/// Per-component relevance of one course for one learner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub interest: f32,
    pub level: f32,
    pub duration: f32,
    pub rating: f32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f32 {
        self.interest + self.level + self.duration + self.rating
    }
}

/// Computes relevance scores for courses against a learner profile.
///
/// Stateless; one scorer can serve any number of concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceScorer;

impl RelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one course.
    pub fn score(&self, course: &Course, profile: &LearnerProfile) -> ScoreBreakdown {
        let interests = normalize_all(&profile.interests);
        self.score_normalized(course, profile, &interests)
    }

    /// Score many courses in parallel.
    ///
    /// # Returns
    /// One breakdown per course, in the same order as the input
    pub fn score_all(&self, courses: &[&Course], profile: &LearnerProfile) -> Vec<ScoreBreakdown> {
        let interests = normalize_all(&profile.interests);
        courses
            .par_iter()
            .map(|course| self.score_normalized(course, profile, &interests))
            .collect()
    }

    fn score_normalized(
        &self,
        course: &Course,
        profile: &LearnerProfile,
        interests: &[String],
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            interest: self.interest_component(course, interests),
            level: self.level_component(course, profile),
            duration: self.duration_component(course, profile),
            rating: self.rating_component(course),
        }
    }

    /// `min(40, matching_tags / total_tags * 40)`, 0 without tags or matches.
    fn interest_component(&self, course: &Course, interests: &[String]) -> f32 {
        if course.tags.is_empty() || interests.is_empty() {
            return 0.0;
        }
        let matches = course
            .tags
            .iter()
            .filter(|tag| tag_matches_any(&normalize_interest(tag), interests))
            .count();
        if matches == 0 {
            return 0.0;
        }
        (matches as f32 / course.tags.len() as f32 * INTEREST_WEIGHT).min(INTEREST_WEIGHT)
    }

    /// First matching branch wins: a course one level above the learner
    /// takes the 30-point branch, only one level below gets 20.
    fn level_component(&self, course: &Course, profile: &LearnerProfile) -> f32 {
        let distance = course.level.index() - profile.current_level.index();
        if distance == 0 || distance == 1 {
            LEVEL_WEIGHT
        } else if distance.abs() == 1 {
            ADJACENT_LEVEL_WEIGHT
        } else {
            0.0
        }
    }

    /// Soft penalty only: a course that does not fit still earns 10.
    fn duration_component(&self, course: &Course, profile: &LearnerProfile) -> f32 {
        if course.required_weeks() <= profile.available_time.available_weeks() {
            DURATION_FIT_WEIGHT
        } else {
            DURATION_MISFIT_WEIGHT
        }
    }

    fn rating_component(&self, course: &Course) -> f32 {
        let rating = if course.rating.is_finite() {
            course.rating.clamp(0.0, MAX_RATING)
        } else {
            0.0
        };
        rating / MAX_RATING * RATING_WEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course_at_level, course_with_tags};
    use catalog::{DurationClass, Level, TimeAvailability};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_interest_component_share_of_tags() {
        let course = course_with_tags(
            "react-101",
            &["react", "frontend", "javascript", "web development"],
        );
        let profile = LearnerProfile::new(["Frontend Development"]);

        // "frontend" and "web development" match via the word/substring rules
        let breakdown = RelevanceScorer.score(&course, &profile);
        assert!(approx(breakdown.interest, 20.0));
    }

    #[test]
    fn test_interest_component_caps_at_weight() {
        let course = course_with_tags("r", &["rust"]);
        let profile = LearnerProfile::new(["Rust", "rust lang"]);
        assert!(approx(RelevanceScorer.score(&course, &profile).interest, 40.0));
    }

    #[test]
    fn test_interest_component_without_tags() {
        let course = course_with_tags("bare", &[]);
        let profile = LearnerProfile::new(["Rust"]);
        assert_eq!(RelevanceScorer.score(&course, &profile).interest, 0.0);
    }

    #[test]
    fn test_level_component_first_branch_wins() {
        let learner = LearnerProfile::default().with_level(Level::Intermediate);
        let scorer = RelevanceScorer;

        let same = scorer.score(&course_at_level("s", Level::Intermediate), &learner);
        let above = scorer.score(&course_at_level("a", Level::Advanced), &learner);
        let below = scorer.score(&course_at_level("b", Level::Beginner), &learner);
        assert_eq!(same.level, 30.0);
        assert_eq!(above.level, 30.0);
        assert_eq!(below.level, 20.0);

        let beginner = LearnerProfile::default().with_level(Level::Beginner);
        assert_eq!(scorer.score(&course_at_level("x", Level::Advanced), &beginner).level, 0.0);

        let advanced = LearnerProfile::default().with_level(Level::Advanced);
        assert_eq!(scorer.score(&course_at_level("y", Level::Beginner), &advanced).level, 0.0);
    }

    #[test]
    fn test_duration_component_is_soft() {
        let mut course = course_at_level("long", Level::Beginner);
        course.duration_class = Some(DurationClass::Advanced); // 8 weeks

        let weekend = LearnerProfile::default().with_available_time(TimeAvailability::Weekend);
        let full_time = LearnerProfile::default().with_available_time(TimeAvailability::FullTime);
        assert_eq!(RelevanceScorer.score(&course, &weekend).duration, 10.0);
        assert_eq!(RelevanceScorer.score(&course, &full_time).duration, 20.0);

        // Unknown class counts as 6 weeks, which does not fit part-time (5)
        course.duration_class = None;
        assert_eq!(RelevanceScorer.score(&course, &LearnerProfile::default()).duration, 10.0);
    }

    #[test]
    fn test_rating_component_bounds() {
        let mut course = course_at_level("r", Level::Beginner);
        course.rating = 4.5;
        assert!(approx(RelevanceScorer.score(&course, &LearnerProfile::default()).rating, 9.0));

        course.rating = 7.0;
        assert_eq!(RelevanceScorer.score(&course, &LearnerProfile::default()).rating, 10.0);

        course.rating = f32::NAN;
        assert_eq!(RelevanceScorer.score(&course, &LearnerProfile::default()).rating, 0.0);
    }

    #[test]
    fn test_score_all_preserves_order() {
        let a = course_with_tags("a", &["rust"]);
        let b = course_with_tags("b", &["go"]);
        let profile = LearnerProfile::new(["rust"]);

        let scores = RelevanceScorer.score_all(&[&a, &b], &profile);
        assert_eq!(scores.len(), 2);
        assert!(scores[0].total() > scores[1].total());
        assert_eq!(scores[0], RelevanceScorer.score(&a, &profile));
    }
}
