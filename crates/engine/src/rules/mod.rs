//! Match rule implementations for the candidate filter.

pub mod interest_match;
pub mod level_match;

pub use interest_match::InterestMatch;
pub use level_match::LevelMatch;
