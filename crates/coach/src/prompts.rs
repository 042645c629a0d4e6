//! Prompt construction for the text-generation backend.

use catalog::LearnerProfile;
use serde::{Deserialize, Serialize};

/// Role and scope given to the generator ahead of every request.
pub const SYSTEM_PROMPT: &str = "\
You are LearnMate, an AI coach specialized in creating personalized learning pathways.

Your role is to:
1. Understand student interests, goals, and current skill levels
2. Assess technical background and learning preferences
3. Create dynamic, personalized course roadmaps
4. Recommend specific courses, resources, and learning milestones
5. Adapt recommendations based on progress and feedback
6. Provide motivational guidance and learning strategies

Available specializations: Frontend Development, Backend Development, Cybersecurity, \
UI/UX Design, Data Science, Cloud Computing, Mobile Development, DevOps & Infrastructure.

Always be encouraging, supportive, and provide actionable guidance.";

/// What the coach knows about the student it talks to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub goals: String,
    pub learner: LearnerProfile,
}

impl StudentSummary {
    /// Display name, "Student" when none was given.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "Student" } else { name }
    }

    /// Interests joined for display, "Not specified" when there are none.
    pub fn interests_label(&self) -> String {
        if self.learner.interests.is_empty() {
            "Not specified".to_string()
        } else {
            self.learner.interests.join(", ")
        }
    }

    fn goals_label(&self) -> &str {
        let goals = self.goals.trim();
        if goals.is_empty() { "Not specified" } else { goals }
    }
}

pub fn coaching_session(student: &StudentSummary) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\n\
         New student profile:\n\
         - Name: {}\n\
         - Interests: {}\n\
         - Current Level: {}\n\
         - Goals: {}\n\
         - Available Time: {}\n\n\
         Please provide:\n\
         1. A brief assessment of the student\n\
         2. Recommended specialization focus\n\
         3. High-level learning pathway (3-6 months)\n\
         4. First 3 courses to get started with\n\
         5. Estimated timeline and milestones",
        student.display_name(),
        student.interests_label(),
        student.learner.current_level,
        student.goals_label(),
        student.learner.available_time,
    )
}

pub fn skill_assessment(skill_area: &str, answers: &str) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\n\
         Assess the student's skill level in {skill_area}:\n\
         Assessment answers:\n{answers}\n\n\
         Provide:\n\
         1. Current skill level (Beginner/Intermediate/Advanced/Expert)\n\
         2. Strengths identified\n\
         3. Areas for improvement\n\
         4. Specific recommendations\n\
         5. Suggested learning resources"
    )
}

pub fn study_guidance(topic: &str, student: &StudentSummary) -> String {
    format!(
        "{SYSTEM_PROMPT}\n\n\
         Student is struggling with: {topic}\n\
         Student Context:\n\
         - Current Level: {}\n\
         - Interests: {}\n\n\
         Provide:\n\
         1. Simple explanation of the topic\n\
         2. Step-by-step learning approach\n\
         3. Practical examples and use cases\n\
         4. Common mistakes to avoid\n\
         5. Resources and projects to practice",
        student.learner.current_level,
        student.interests_label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Level, TimeAvailability};

    #[test]
    fn test_coaching_prompt_includes_profile() {
        let student = StudentSummary {
            name: "Ada".to_string(),
            goals: "Ship a web app".to_string(),
            learner: LearnerProfile::new(["Frontend Development", "Cloud Computing"])
                .with_level(Level::Intermediate)
                .with_available_time(TimeAvailability::Weekend),
        };
        let prompt = coaching_session(&student);

        assert!(prompt.starts_with("You are LearnMate"));
        assert!(prompt.contains("- Name: Ada"));
        assert!(prompt.contains("Frontend Development, Cloud Computing"));
        assert!(prompt.contains("- Current Level: intermediate"));
        assert!(prompt.contains("- Available Time: weekend"));
    }

    #[test]
    fn test_missing_fields_have_placeholders() {
        let prompt = coaching_session(&StudentSummary::default());
        assert!(prompt.contains("- Name: Student"));
        assert!(prompt.contains("- Interests: Not specified"));
        assert!(prompt.contains("- Goals: Not specified"));
    }
}
