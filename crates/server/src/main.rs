//! Test harness for the LearnMate orchestrator.
//!
//! Walks a sample student through the whole guided flow: intake,
//! assessment, learning path, one completed course and a chat exchange.
//! Pass a config file path as the first argument to override defaults.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::{Level, TimeAvailability};
use coach::CoachService;
use server::{AppConfig, AssessmentAnswers, LearnMateOrchestrator, StudentProfile};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,engine=debug")),
        )
        .init();

    info!("Starting LearnMate test harness");

    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load(Path::new(&path))?,
        None => AppConfig::default(),
    };
    let catalog = Arc::new(config.load_catalog()?);
    info!("Catalog ready with {} courses", catalog.len());

    let orchestrator = LearnMateOrchestrator::new(catalog, CoachService::offline(), config);

    let student = StudentProfile {
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        interests: vec!["Frontend Development".to_string(), "UI/UX Design".to_string()],
        current_level: Level::Intermediate,
        goals: "Ship a production web app".to_string(),
        available_time: TimeAvailability::FullTime,
        ..StudentProfile::default()
    };

    let state = orchestrator
        .submit_profile(orchestrator.initial_state(), student)
        .await?;
    if let Some(welcome) = state.conversation.last() {
        info!("Coach: {}", welcome.text);
    }

    let answers = AssessmentAnswers {
        experience: "Two years of JavaScript".to_string(),
        projects: "A personal blog".to_string(),
        challenges: "State management".to_string(),
        strengths: "Layout and styling".to_string(),
    };
    let report = orchestrator.submit_assessment(state, answers).await?;
    info!("Assessment ({:?}):\n{}", report.outcome, report.assessment);

    let mut state = report.state;
    if let Some(path) = &state.learning_path {
        info!("{}:", path.name);
        for (i, course) in path.courses.iter().enumerate() {
            info!(
                "{}. {} [{}] on {} ({:.1}★)",
                i + 1,
                course.title,
                course.level,
                course.platform,
                course.rating
            );
        }
        if let Some(first) = path.current_course.clone() {
            state = state.complete_course(&first);
        }
    }
    if let Some(path) = &state.learning_path {
        info!("Progress: {}%", path.progress_percentage);
    }

    let turn = orchestrator
        .send_chat(state, "Which course should I take next?")
        .await?;
    if let Some(reply) = turn.reply {
        info!("Coach: {}", reply.text);
    }

    info!("Harness finished");
    Ok(())
}
