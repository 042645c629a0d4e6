//! Core traits for candidate selection.
//!
//! A `MatchRule` decides whether one course is eligible for one learner.
//! Rules are combined by the `CandidateFilter`.

use catalog::{Course, LearnerProfile};

/// A single eligibility rule.
///
/// `Send + Sync` lets one filter be shared by concurrent recommendation
/// calls. Rules are pure: they never fail and never mutate their inputs.
pub trait MatchRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `course` passes this rule for `profile`.
    fn matches(&self, course: &Course, profile: &LearnerProfile) -> bool;
}
