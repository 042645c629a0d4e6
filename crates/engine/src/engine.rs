//! # Recommendation Engine
//!
//! Ties the stages together:
//! 1. Select candidates (interest or level match, with fallback)
//! 2. Score candidates in parallel
//! 3. Rank by descending score, stable on ties
//! 4. Return the top `max_results`
//!
//! The engine is a pure function of its inputs. It never mutates the catalog
//! or the profile and keeps no state between calls, so one engine can be
//! shared by any number of threads.

use crate::candidate_filter::{CandidateFilter, Selection};
use crate::ranker::rank;
use crate::scorer::{RelevanceScorer, ScoreBreakdown};
use catalog::{Course, LearnerProfile};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Default bound on returned recommendations and on the fallback head.
pub const DEFAULT_LIMIT: usize = 10;

/// Tunables for the recommendation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of ranked recommendations returned
    pub max_results: usize,
    /// Number of catalog entries returned when nothing passes filtering
    pub fallback_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_LIMIT,
            fallback_size: DEFAULT_LIMIT,
        }
    }
}

/// How a recommendation list was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationOutcome {
    /// Candidates were scored and ranked
    Ranked,
    /// No candidate passed filtering; catalog head returned unranked
    Fallback,
}

/// One course in a recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCourse {
    pub course: Course,
    /// `None` on the fallback path, which bypasses scoring
    pub breakdown: Option<ScoreBreakdown>,
}

impl RankedCourse {
    pub fn score(&self) -> Option<f32> {
        self.breakdown.as_ref().map(ScoreBreakdown::total)
    }
}

/// Ordered recommendations for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub outcome: RecommendationOutcome,
    pub courses: Vec<RankedCourse>,
}

impl Recommendations {
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Drop the scoring details and keep the ordered courses.
    pub fn into_courses(self) -> Vec<Course> {
        self.courses.into_iter().map(|ranked| ranked.course).collect()
    }
}

/// Filters, scores and ranks courses for a learner.
pub struct RecommendationEngine {
    filter: CandidateFilter,
    scorer: RelevanceScorer,
    config: EngineConfig,
}

impl RecommendationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            filter: CandidateFilter::standard(config.fallback_size),
            scorer: RelevanceScorer::new(),
            config,
        }
    }

    /// Use a custom candidate filter instead of the interest-or-level one.
    pub fn with_filter(mut self, filter: CandidateFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Recommend courses from `courses` (in catalog order) for `profile`.
    ///
    /// Never fails. The result holds at most `max_results` ranked courses,
    /// or at most `fallback_size` unranked ones when nothing passed
    /// filtering. It is empty only when `courses` is empty.
    pub fn recommend(&self, profile: &LearnerProfile, courses: &[Course]) -> Recommendations {
        let start = Instant::now();

        let candidates = match self.filter.select(courses, profile) {
            Selection::Fallback(head) => {
                return Recommendations {
                    outcome: RecommendationOutcome::Fallback,
                    courses: head
                        .into_iter()
                        .map(|course| RankedCourse {
                            course: course.clone(),
                            breakdown: None,
                        })
                        .collect(),
                };
            }
            Selection::Candidates(candidates) => candidates,
        };

        let breakdowns = self.scorer.score_all(&candidates, profile);
        let scored: Vec<((&Course, ScoreBreakdown), f32)> = candidates
            .into_iter()
            .zip(breakdowns)
            .map(|(course, breakdown)| ((course, breakdown), breakdown.total()))
            .collect();
        let candidate_count = scored.len();

        let ranked: Vec<RankedCourse> = rank(scored, self.config.max_results)
            .into_iter()
            .map(|((course, breakdown), _)| RankedCourse {
                course: course.clone(),
                breakdown: Some(breakdown),
            })
            .collect();

        tracing::debug!(
            "Ranked {} of {} candidates in {:.2?}",
            ranked.len(),
            candidate_count,
            start.elapsed()
        );

        Recommendations {
            outcome: RecommendationOutcome::Ranked,
            courses: ranked,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Recommend up to ten courses for `profile`, ordered by descending
/// relevance.
///
/// When no course passes filtering this returns the first ten catalog
/// entries in catalog order without ranking them. That keeps the result
/// non-empty for any non-empty catalog but silently drops relevance, so
/// callers that care should use [`RecommendationEngine::recommend`] and
/// check [`Recommendations::outcome`].
pub fn recommend(profile: &LearnerProfile, courses: &[Course]) -> Vec<Course> {
    RecommendationEngine::default()
        .recommend(profile, courses)
        .into_courses()
}
