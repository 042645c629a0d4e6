//! Student intake: the profile form and the assessment answers.

use catalog::{LearnerProfile, Level, TimeAvailability};
use coach::StudentSummary;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Intake areas offered to new students.
pub const INTEREST_AREAS: [&str; 8] = [
    "Frontend Development",
    "Backend Development",
    "Cybersecurity",
    "UI/UX Design",
    "Data Science",
    "Cloud Computing",
    "Mobile Development",
    "DevOps",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please select at least one interest")]
    NoInterests,

    #[error("Please describe your learning goals")]
    MissingGoals,
}

/// Everything the intake form collects about a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentProfile {
    /// Assigned when the profile is stored in the app state
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub interests: Vec<String>,
    pub current_level: Level,
    pub goals: String,
    pub available_time: TimeAvailability,
    pub learning_style: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            interests: Vec::new(),
            current_level: Level::Beginner,
            goals: String::new(),
            available_time: TimeAvailability::PartTime,
            learning_style: "visual".to_string(),
        }
    }
}

impl StudentProfile {
    /// Check the form in the order its fields appear.
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.name.trim().is_empty() {
            return Err(IntakeError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(IntakeError::MissingEmail);
        }
        if self.interests.is_empty() {
            return Err(IntakeError::NoInterests);
        }
        if self.goals.trim().is_empty() {
            return Err(IntakeError::MissingGoals);
        }
        Ok(())
    }

    /// Toggle an interest on or off, keeping selection order.
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(position) = self.interests.iter().position(|i| i == interest) {
            self.interests.remove(position);
        } else {
            self.interests.push(interest.to_string());
        }
    }

    /// The part of the profile the recommendation engine reads.
    pub fn learner_profile(&self) -> LearnerProfile {
        LearnerProfile {
            interests: self.interests.clone(),
            current_level: self.current_level,
            available_time: self.available_time,
        }
    }

    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            name: self.name.clone(),
            goals: self.goals.clone(),
            learner: self.learner_profile(),
        }
    }
}

/// Free-text answers from the skill assessment step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentAnswers {
    pub experience: String,
    pub projects: String,
    pub challenges: String,
    pub strengths: String,
}

impl AssessmentAnswers {
    /// One labelled line per answer, for the coach's assessment prompt.
    pub fn to_prompt_text(&self) -> String {
        format!(
            "Experience: {}\nProjects: {}\nChallenges: {}\nStrengths: {}",
            self.experience, self.projects, self.challenges, self.strengths
        )
    }
}
