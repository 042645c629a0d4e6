//! Deterministic replies used when no text generator is available.
//!
//! Chat replies are keyed on keywords in the learner's message; the first
//! topic that matches wins. Everything here is a pure function of its input.

use crate::prompts::StudentSummary;

/// Topics the offline responder recognises, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    Greeting,
    Courses,
    Help,
    Progress,
    Time,
    Other,
}

impl ChatTopic {
    /// Classify a message by keyword.
    ///
    /// Greetings must be whole words so "this" or "which" do not count as
    /// "hi"; the other keywords match anywhere in the message.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if words.iter().any(|w| matches!(*w, "hello" | "hi" | "hey")) {
            ChatTopic::Greeting
        } else if contains_any(&["course", "recommend"]) {
            ChatTopic::Courses
        } else if contains_any(&["help", "stuck"]) {
            ChatTopic::Help
        } else if contains_any(&["progress", "track"]) {
            ChatTopic::Progress
        } else if contains_any(&["time", "schedule"]) {
            ChatTopic::Time
        } else {
            ChatTopic::Other
        }
    }
}

/// Offline stand-in for the text-generation service.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResponder;

impl OfflineResponder {
    pub fn chat(&self, message: &str) -> String {
        match ChatTopic::classify(message) {
            ChatTopic::Greeting => "Hello! I'm your LearnMate coach. I'm here to help with your \
                 learning journey. How can I assist you today?"
                .to_string(),
            ChatTopic::Courses => "I'd be happy to recommend courses! \
                 Based on your learning path:\n\n\
                 1. **Start with foundational courses** - build strong basics\n\
                 2. **Practice with projects** - apply what you learn\n\
                 3. **Progress gradually** - move from beginner to advanced\n\
                 4. **Stay consistent** - regular practice is key\n\n\
                 Check your Learning Path for personalized course recommendations!"
                .to_string(),
            ChatTopic::Help => "Getting stuck is part of learning! Here's how I can help:\n\n\
                 - **Break down complex topics** into simpler concepts\n\
                 - **Suggest resources** and practice exercises\n\
                 - **Guide you** through challenging areas\n\n\
                 What specific topic do you need help with?"
                .to_string(),
            ChatTopic::Progress => "Here's how to track your progress:\n\n\
                 - Complete courses in your Learning Path\n\
                 - Mark courses as completed\n\
                 - Build projects to apply your knowledge\n\
                 - Review your milestones regularly"
                .to_string(),
            ChatTopic::Time => "Time management tips:\n\n\
                 - **Set a regular schedule** - consistency beats intensity\n\
                 - **Start small** - even 30 minutes daily helps\n\
                 - **Focus on one topic** at a time\n\n\
                 Your recommended courses already take your availability into account."
                .to_string(),
            ChatTopic::Other => "Thanks for your question! I'm running in offline mode, but I can \
                 still help you:\n\n\
                 - View your personalized learning path\n\
                 - Explore course recommendations\n\
                 - Track your progress\n\n\
                 Configure a text-generation backend for richer answers."
                .to_string(),
        }
    }

    pub fn coaching(&self, student: &StudentSummary) -> String {
        format!(
            "Welcome to LearnMate, {}!\n\n\
             Based on your interests in {}, I've created a personalized learning path for you.\n\n\
             **Your Learning Journey:**\n\
             - **Current Level**: {}\n\
             - **Focus Areas**: {}\n\
             - **Available Time**: {}\n\n\
             **Recommended Path:**\n\
             1. Start with foundational courses to build strong basics\n\
             2. Practice with hands-on projects\n\
             3. Progress to intermediate concepts\n\
             4. Master advanced techniques",
            student.display_name(),
            student.interests_label(),
            student.learner.current_level,
            student.interests_label(),
            student.learner.available_time,
        )
    }

    pub fn assessment(&self, skill_area: &str) -> String {
        format!(
            "**Skill Assessment Complete!**\n\n\
             Here's your evaluation for {skill_area}:\n\n\
             **Strengths Identified:**\n\
             - Good understanding of fundamental concepts\n\
             - Clear learning goals\n\n\
             **Areas for Improvement:**\n\
             - Build more hands-on projects\n\
             - Practice with real-world scenarios\n\n\
             **Recommendations:**\n\
             - Start with beginner-friendly courses\n\
             - Build a portfolio of projects"
        )
    }

    pub fn study_guidance(&self, topic: &str) -> String {
        format!(
            "**Study Guidance for {topic}**\n\n\
             Here's how to approach learning {topic}:\n\n\
             1. **Start with basics** - understand core concepts\n\
             2. **Practice regularly** - hands-on experience is key\n\
             3. **Build projects** - apply what you learn\n\
             4. **Join communities** - learn from others\n\
             5. **Stay consistent** - regular practice matters"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::LearnerProfile;

    #[test]
    fn test_classify_topics() {
        assert_eq!(ChatTopic::classify("Hi there!"), ChatTopic::Greeting);
        assert_eq!(ChatTopic::classify("Can you recommend a course?"), ChatTopic::Courses);
        assert_eq!(ChatTopic::classify("I'm stuck on closures"), ChatTopic::Help);
        assert_eq!(ChatTopic::classify("How do I track my progress"), ChatTopic::Progress);
        assert_eq!(ChatTopic::classify("What schedule works best?"), ChatTopic::Time);
        assert_eq!(ChatTopic::classify("Tell me a joke"), ChatTopic::Other);
    }

    #[test]
    fn test_greeting_needs_whole_word() {
        // "this" and "which" contain "hi" but are not greetings
        assert_eq!(ChatTopic::classify("which of this matters"), ChatTopic::Other);
    }

    #[test]
    fn test_first_topic_wins() {
        assert_eq!(ChatTopic::classify("hello, I need help"), ChatTopic::Greeting);
        assert_eq!(ChatTopic::classify("help me pick a course"), ChatTopic::Courses);
    }

    #[test]
    fn test_chat_is_deterministic() {
        let responder = OfflineResponder;
        assert_eq!(responder.chat("help"), responder.chat("help"));
        assert!(responder.chat("anything else").contains("offline mode"));
    }

    #[test]
    fn test_coaching_mentions_student() {
        let student = StudentSummary {
            name: "Grace".to_string(),
            goals: String::new(),
            learner: LearnerProfile::new(["Cybersecurity"]),
        };
        let text = OfflineResponder.coaching(&student);
        assert!(text.contains("Grace"));
        assert!(text.contains("Cybersecurity"));
        assert!(text.contains("part-time"));
    }
}
