//! Core domain types for the course catalog.
//!
//! Skill level, duration class and time availability are closed enums.
//! Every label parser in this module is total: an unknown label degrades to
//! a documented default instead of failing, so a profile or course read
//! from loose input can always be scored.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Skill level
// =============================================================================

/// Prerequisite difficulty of a course, or the current level of a learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Ordinal used for level distance comparisons (beginner=0 .. advanced=2).
    pub fn index(self) -> i32 {
        match self {
            Level::Beginner => 0,
            Level::Intermediate => 1,
            Level::Advanced => 2,
        }
    }

    /// Parse a label case-insensitively. Unknown labels map to `Beginner`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "intermediate" => Level::Intermediate,
            "advanced" => Level::Advanced,
            _ => Level::Beginner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl From<String> for Level {
    fn from(label: String) -> Self {
        Level::from_label(&label)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Duration class
// =============================================================================

/// Coarse per-course time commitment label.
///
/// Shares its vocabulary with [`Level`] but is an independent axis: it is
/// only ever compared against a learner's [`TimeAvailability`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationClass {
    Beginner,
    Intermediate,
    Advanced,
}

impl DurationClass {
    /// Weeks assumed when a course has no recognised duration class.
    pub const DEFAULT_WEEKS: u32 = 6;

    /// Nominal weeks a course of this class takes.
    pub fn required_weeks(self) -> u32 {
        match self {
            DurationClass::Beginner => 4,
            DurationClass::Intermediate => 6,
            DurationClass::Advanced => 8,
        }
    }

    /// Parse a label case-insensitively, `None` when unrecognised.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(DurationClass::Beginner),
            "intermediate" => Some(DurationClass::Intermediate),
            "advanced" => Some(DurationClass::Advanced),
            _ => None,
        }
    }
}

// =============================================================================
// Time availability
// =============================================================================

/// How much time a learner can commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum TimeAvailability {
    #[default]
    PartTime,
    FullTime,
    Weekend,
}

impl TimeAvailability {
    /// Nominal weeks of study this availability affords.
    pub fn available_weeks(self) -> u32 {
        match self {
            TimeAvailability::PartTime => 5,
            TimeAvailability::FullTime => 10,
            TimeAvailability::Weekend => 2,
        }
    }

    /// Parse a label case-insensitively. Unknown labels map to `PartTime`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "full-time" => TimeAvailability::FullTime,
            "weekend" => TimeAvailability::Weekend,
            _ => TimeAvailability::PartTime,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeAvailability::PartTime => "part-time",
            TimeAvailability::FullTime => "full-time",
            TimeAvailability::Weekend => "weekend",
        }
    }
}

impl From<String> for TimeAvailability {
    fn from(label: String) -> Self {
        TimeAvailability::from_label(&label)
    }
}

impl fmt::Display for TimeAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Course
// =============================================================================

/// A single catalog entry. Courses are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub level: Level,
    /// `None` when the source label was not a known duration class
    #[serde(
        rename = "duration",
        default,
        deserialize_with = "crate::parser::lenient_duration_class"
    )]
    pub duration_class: Option<DurationClass>,
    pub price: f64,
    /// Average rating from 0.0 to 5.0
    pub rating: f32,
    #[serde(rename = "students", default)]
    pub students_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub description: String,
}

impl Course {
    /// Weeks this course is expected to take, defaulting for unknown classes.
    pub fn required_weeks(&self) -> u32 {
        self.duration_class
            .map(DurationClass::required_weeks)
            .unwrap_or(DurationClass::DEFAULT_WEEKS)
    }
}

// =============================================================================
// Learner profile
// =============================================================================

/// What the engine knows about a learner for one recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    /// Free-text interests in the order the learner picked them
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub current_level: Level,
    #[serde(default)]
    pub available_time: TimeAvailability,
}

impl LearnerProfile {
    pub fn new<I, S>(interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interests: interests.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.current_level = level;
        self
    }

    pub fn with_available_time(mut self, time: TimeAvailability) -> Self {
        self.available_time = time;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels_are_lenient() {
        assert_eq!(Level::from_label("Advanced"), Level::Advanced);
        assert_eq!(Level::from_label(" intermediate "), Level::Intermediate);
        assert_eq!(Level::from_label("expert"), Level::Beginner);
        assert_eq!(Level::from_label(""), Level::Beginner);
    }

    #[test]
    fn test_level_index_ordering() {
        let indices: Vec<i32> = Level::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_time_availability_defaults_to_part_time() {
        assert_eq!(TimeAvailability::from_label("FULL-TIME"), TimeAvailability::FullTime);
        assert_eq!(TimeAvailability::from_label("evenings"), TimeAvailability::PartTime);
        assert_eq!(TimeAvailability::from_label("weekend").available_weeks(), 2);
    }

    #[test]
    fn test_unknown_duration_class_uses_default_weeks() {
        let course = Course {
            id: "x".to_string(),
            title: "X".to_string(),
            platform: "Udemy".to_string(),
            level: Level::Beginner,
            duration_class: None,
            price: 0.0,
            rating: 4.0,
            students_count: 0,
            tags: vec![],
            instructor: String::new(),
            description: String::new(),
        };
        assert_eq!(course.required_weeks(), 6);
    }

    #[test]
    fn test_profile_deserializes_with_unknown_labels() {
        let json =
            r#"{"interests":["Data Science"],"currentLevel":"guru","availableTime":"whenever"}"#;
        let profile: LearnerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.current_level, Level::Beginner);
        assert_eq!(profile.available_time, TimeAvailability::PartTime);
        assert_eq!(profile.interests, vec!["Data Science".to_string()]);
    }

    #[test]
    fn test_profile_serializes_kebab_case_time() {
        let profile = LearnerProfile::new(["Cloud"])
            .with_level(Level::Advanced)
            .with_available_time(TimeAvailability::FullTime);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"full-time\""));
        assert!(json.contains("\"advanced\""));
    }
}
