//! Learning paths built from recommendations.

use crate::config::PathConfig;
use catalog::Course;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    InProgress,
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub duration: String,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedCourse {
    pub id: String,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub courses: Vec<Course>,
    pub milestones: Vec<Milestone>,
    pub completed: Vec<CompletedCourse>,
    pub current_course: Option<String>,
    pub progress_percentage: u8,
}

impl LearningPath {
    /// Build a path named after the learner's first interest from ranked
    /// recommendations, keeping the first `courses_per_path`.
    pub fn build(first_interest: &str, recommendations: Vec<Course>, config: &PathConfig) -> Self {
        let courses: Vec<Course> = recommendations
            .into_iter()
            .take(config.courses_per_path)
            .collect();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: format!("{first_interest} Mastery Path"),
            current_course: courses.first().map(|course| course.id.clone()),
            courses,
            milestones: default_milestones(),
            completed: Vec::new(),
            progress_percentage: 0,
        }
    }

    pub fn is_completed(&self, course_id: &str) -> bool {
        self.completed.iter().any(|done| done.id == course_id)
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.iter().any(|course| course.id == course_id)
    }

    /// Record a completed course and move progress forward, capped at 100.
    ///
    /// Courses outside the path and repeated completions are ignored.
    pub fn complete_course(mut self, course_id: &str, progress_step: u8) -> Self {
        if !self.contains(course_id) || self.is_completed(course_id) {
            return self;
        }
        self.completed.push(CompletedCourse {
            id: course_id.to_string(),
            completed_at: Utc::now(),
        });
        self.progress_percentage = self.progress_percentage.saturating_add(progress_step).min(100);
        self.current_course = self
            .courses
            .iter()
            .find(|course| !self.is_completed(&course.id))
            .map(|course| course.id.clone());
        self
    }
}

fn default_milestones() -> Vec<Milestone> {
    use MilestoneStatus::{InProgress, Pending};
    [
        ("Foundation Building", "Complete first 2 courses", "4 weeks", InProgress),
        ("Intermediate Skills", "Build 2 projects", "8 weeks", Pending),
        ("Advanced Specialization", "Complete advanced course", "12 weeks", Pending),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, duration, status), id)| Milestone {
        id,
        name: name.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
        status,
    })
    .collect()
}
