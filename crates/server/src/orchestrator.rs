//! # LearnMate Orchestrator
//!
//! Coordinates the guided flow on top of the pure pieces:
//! 1. Validate and store the student profile, greet via the coach
//! 2. On assessment: ask the coach for an evaluation and run the
//!    recommendation engine in parallel
//! 3. Build the learning path from the ranked courses
//! 4. Relay chat messages through the coach
//!
//! Engine and coach calls are synchronous and may be slow (a remote text
//! generator), so they run on the blocking pool.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use catalog::{Catalog, Course, LearnerProfile};
use coach::{ChatMessage, CoachService};
use engine::{RecommendationEngine, RecommendationOutcome, Recommendations};

use crate::config::AppConfig;
use crate::intake::{AssessmentAnswers, IntakeError, StudentProfile};
use crate::learning_path::LearningPath;
use crate::state::{AppState, Step};

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error("Unable to generate course recommendations. Please try again.")]
    NoRecommendations,

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// What the assessment step produced.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub state: AppState,
    /// Coach's evaluation of the answers
    pub assessment: String,
    pub outcome: RecommendationOutcome,
}

/// Result of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub state: AppState,
    /// The coach's answer; `None` when the message was blank. Present even
    /// when the history bound has already evicted it from the state.
    pub reply: Option<ChatMessage>,
}

/// Main orchestrator tying catalog, engine and coach together.
///
/// Cheap to clone; every clone shares the same catalog and engine.
#[derive(Clone)]
pub struct LearnMateOrchestrator {
    catalog: Arc<Catalog>,
    engine: Arc<RecommendationEngine>,
    coach: CoachService,
    config: AppConfig,
}

impl LearnMateOrchestrator {
    pub fn new(catalog: Arc<Catalog>, coach: CoachService, config: AppConfig) -> Self {
        let engine = Arc::new(RecommendationEngine::new(config.engine));
        Self {
            catalog,
            engine,
            coach,
            config,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// A fresh state sized by this orchestrator's config.
    pub fn initial_state(&self) -> AppState {
        AppState::new(&self.config)
    }

    /// Run the engine for `profile` on the blocking pool.
    pub async fn recommend(
        &self,
        profile: LearnerProfile,
    ) -> Result<Recommendations, WorkflowError> {
        let engine = self.engine.clone();
        let catalog = self.catalog.clone();
        let recommendations =
            tokio::task::spawn_blocking(move || engine.recommend(&profile, catalog.courses()))
                .await?;
        Ok(recommendations)
    }

    /// Validate the intake form, store it, and greet the student.
    pub async fn submit_profile(
        &self,
        state: AppState,
        form: StudentProfile,
    ) -> Result<AppState, WorkflowError> {
        form.validate()?;
        let summary = form.summary();

        let coach = self.coach.clone();
        let welcome = tokio::task::spawn_blocking(move || coach.start_session(&summary)).await?;
        info!("Stored profile for {}", form.name);

        Ok(state
            .with_student(form)
            .with_message(ChatMessage::coach(welcome))
            .clear_error()
            .go_to(Step::Assessment))
    }

    /// Evaluate the assessment and build the learning path.
    pub async fn submit_assessment(
        &self,
        state: AppState,
        answers: AssessmentAnswers,
    ) -> Result<AssessmentReport, WorkflowError> {
        let start_time = Instant::now();

        let student = &state.student;
        let first_interest = student
            .interests
            .first()
            .cloned()
            .ok_or(IntakeError::NoInterests)?;
        if student.name.trim().is_empty() {
            return Err(IntakeError::MissingName.into());
        }

        let answers_text = answers.to_prompt_text();
        let coach = self.coach.clone();
        let skill_area = first_interest.clone();

        // Coach evaluation and recommendation run side by side
        let (assessment, recommendations) = tokio::join!(
            tokio::task::spawn_blocking(move || coach.assess_skill(&skill_area, &answers_text)),
            self.recommend(student.learner_profile())
        );
        let assessment = assessment?;
        let recommendations = recommendations?;

        if recommendations.is_empty() {
            warn!("No recommendations for {}", student.name);
            return Err(WorkflowError::NoRecommendations);
        }
        let outcome = recommendations.outcome;
        if outcome == RecommendationOutcome::Fallback {
            warn!(
                "Learning path for {} built from unranked fallback courses",
                student.name
            );
        }

        let courses: Vec<Course> = recommendations.into_courses();
        let path = LearningPath::build(&first_interest, courses, &self.config.path);
        info!(
            "Built '{}' with {} courses in {:.2?}",
            path.name,
            path.courses.len(),
            start_time.elapsed()
        );

        let state = state
            .with_learning_path(path)
            .clear_error()
            .go_to(Step::LearningPath);
        Ok(AssessmentReport {
            state,
            assessment,
            outcome,
        })
    }

    /// Send a chat message and append the coach's reply.
    ///
    /// Blank messages leave the state untouched.
    pub async fn send_chat(
        &self,
        state: AppState,
        message: &str,
    ) -> Result<ChatTurn, WorkflowError> {
        if message.trim().is_empty() {
            return Ok(ChatTurn { state, reply: None });
        }
        let history = state.conversation.messages();
        let coach = self.coach.clone();
        let text = message.to_string();
        let reply = tokio::task::spawn_blocking(move || coach.chat(&text, &history)).await?;
        let reply = ChatMessage::coach(reply);

        let state = state
            .with_message(ChatMessage::user(message))
            .with_message(reply.clone())
            .go_to(Step::Chat);
        Ok(ChatTurn {
            state,
            reply: Some(reply),
        })
    }
}
