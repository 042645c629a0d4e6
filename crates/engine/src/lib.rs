//! Course recommendation and ranking engine.
//!
//! This crate provides:
//! - Interest normalization and the tag/interest matching rule
//! - MatchRule trait and the interest / level rules
//! - CandidateFilter for selecting candidates, with the fallback path
//! - RelevanceScorer for the weighted relevance score
//! - A stable ranker and the `recommend` entry point
//!
//! ## Architecture
//! A request flows through the stages in order:
//! 1. CandidateFilter keeps courses that match an interest OR sit at most
//!    one level above the learner; if none do, the first catalog entries
//!    are returned unranked
//! 2. RelevanceScorer scores the remaining candidates
//! 3. The ranker sorts them by descending score (stable) and truncates
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, LearnerProfile, Level};
//! use engine::recommend;
//!
//! let catalog = Catalog::builtin();
//! let profile = LearnerProfile::new(["Frontend Development"]).with_level(Level::Beginner);
//! for course in recommend(&profile, catalog.courses()) {
//!     println!("{}", course.title);
//! }
//! ```

pub mod candidate_filter;
pub mod engine;
pub mod normalize;
pub mod ranker;
pub mod rules;
pub mod scorer;
pub mod traits;

// Re-export main types
pub use candidate_filter::{CandidateFilter, Selection};
pub use engine::{
    DEFAULT_LIMIT, EngineConfig, RankedCourse, RecommendationEngine, RecommendationOutcome,
    Recommendations, recommend,
};
pub use normalize::{normalize_interest, tag_matches_interest};
pub use scorer::{RelevanceScorer, ScoreBreakdown};
pub use traits::MatchRule;
