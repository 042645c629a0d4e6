use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Semaphore;
use tracing::{info, warn};

use catalog::{Catalog, Course, LearnerProfile, Level, TimeAvailability};
use coach::CoachService;
use engine::{RecommendationOutcome, Recommendations, normalize_interest, tag_matches_interest};
use server::{
    AppConfig, AppState, AssessmentAnswers, INTEREST_AREAS, LearnMateOrchestrator, StudentProfile,
};

/// LearnMate - personalized course recommendations and study coaching
#[derive(Parser)]
#[command(name = "learnmate")]
#[command(about = "Course recommendation engine with a study coach", long_about = None)]
struct Cli {
    /// JSON course list to use instead of the built-in catalog
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON config file with engine, path and chat settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Learner fields shared by the commands that need a profile.
#[derive(Args, Clone)]
struct LearnerArgs {
    /// Interest area, repeat for several (e.g. --interest "Data Science")
    #[arg(short, long = "interest")]
    interests: Vec<String>,

    /// Current level: beginner, intermediate or advanced
    #[arg(short, long, default_value = "beginner")]
    level: String,

    /// Available time: part-time, full-time or weekend
    #[arg(short, long, default_value = "part-time")]
    time: String,
}

impl LearnerArgs {
    fn profile(&self) -> LearnerProfile {
        LearnerProfile::new(self.interests.iter().cloned())
            .with_level(Level::from_label(&self.level))
            .with_available_time(TimeAvailability::from_label(&self.time))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Get ranked course recommendations
    Recommend {
        #[command(flatten)]
        learner: LearnerArgs,

        /// Maximum number of recommendations
        #[arg(long)]
        limit: Option<usize>,

        /// Show the score breakdown for each course
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a learning path through intake and assessment
    Path {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// What the student wants to achieve
        #[arg(long)]
        goals: String,

        #[command(flatten)]
        learner: LearnerArgs,

        /// Course id to mark as completed, repeatable
        #[arg(long)]
        complete: Vec<String>,

        /// Print the path as JSON
        #[arg(long)]
        json: bool,
    },

    /// Talk to the study coach; reads stdin when no message is given
    Chat {
        /// Messages to send in order
        messages: Vec<String>,
    },

    /// List the course catalog
    Catalog {
        /// Only courses at this level
        #[arg(long)]
        level: Option<String>,

        /// Only courses with a tag matching this interest
        #[arg(long)]
        tag: Option<String>,

        /// Print the courses as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).context("Failed to load config")?,
        None => AppConfig::default(),
    };
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog.clone();
    }
    let catalog = Arc::new(config.load_catalog().context("Failed to load course catalog")?);
    info!("Catalog ready with {} courses", catalog.len());

    match cli.command {
        Commands::Recommend {
            learner,
            limit,
            explain,
            json,
        } => {
            if let Some(limit) = limit {
                config.engine.max_results = limit;
            }
            let orchestrator = LearnMateOrchestrator::new(catalog, CoachService::offline(), config);
            handle_recommend(&orchestrator, learner.profile(), explain, json).await?
        }
        Commands::Path {
            name,
            email,
            goals,
            learner,
            complete,
            json,
        } => {
            let orchestrator = LearnMateOrchestrator::new(catalog, CoachService::offline(), config);
            let student = StudentProfile {
                name,
                email,
                goals,
                interests: learner.interests.clone(),
                current_level: Level::from_label(&learner.level),
                available_time: TimeAvailability::from_label(&learner.time),
                ..StudentProfile::default()
            };
            handle_path(&orchestrator, student, &complete, json).await?
        }
        Commands::Chat { messages } => {
            let orchestrator = LearnMateOrchestrator::new(catalog, CoachService::offline(), config);
            handle_chat(&orchestrator, messages).await?
        }
        Commands::Catalog { level, tag, json } => handle_catalog(&catalog, level, tag, json)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => {
            let orchestrator = LearnMateOrchestrator::new(catalog, CoachService::offline(), config);
            handle_benchmark(orchestrator, requests, concurrent).await?
        }
    }

    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    orchestrator: &LearnMateOrchestrator,
    profile: LearnerProfile,
    explain: bool,
    json: bool,
) -> Result<()> {
    let recommendations = orchestrator.recommend(profile).await?;
    if recommendations.outcome == RecommendationOutcome::Fallback {
        warn!("No course matched the profile; returning catalog entries unranked");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }
    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'path' command
async fn handle_path(
    orchestrator: &LearnMateOrchestrator,
    student: StudentProfile,
    complete: &[String],
    json: bool,
) -> Result<()> {
    let state = orchestrator
        .submit_profile(orchestrator.initial_state(), student)
        .await?;
    let welcome = state.conversation.last().map(|m| m.text.clone());

    let report = orchestrator
        .submit_assessment(state, AssessmentAnswers::default())
        .await?;
    let state = complete
        .iter()
        .fold(report.state, |state, id| state.complete_course(id));
    let path = state
        .learning_path
        .as_ref()
        .ok_or_else(|| anyhow!("No learning path was built"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(path)?);
        return Ok(());
    }

    if let Some(welcome) = welcome {
        println!("{}\n", welcome);
    }
    println!("{}\n", report.assessment);
    if report.outcome == RecommendationOutcome::Fallback {
        println!("{}", "No course matched your profile; showing popular courses.".yellow());
    }

    println!("{}", path.name.bold().blue());
    for (i, course) in path.courses.iter().enumerate() {
        let marker = if path.is_completed(&course.id) {
            "✓".green()
        } else if path.current_course.as_deref() == Some(course.id.as_str()) {
            "▶".yellow()
        } else {
            " ".normal()
        };
        println!(
            "{} {}. {} [{}] ({})",
            marker,
            i + 1,
            course.title,
            course.level,
            course.id.dimmed()
        );
    }
    println!("Progress: {}%", path.progress_percentage);

    println!("{}", "Milestones:".bold());
    for milestone in &path.milestones {
        println!(
            "  {} - {} ({}, {:?})",
            milestone.name, milestone.description, milestone.duration, milestone.status
        );
    }
    Ok(())
}

/// Handle the 'chat' command
async fn handle_chat(orchestrator: &LearnMateOrchestrator, messages: Vec<String>) -> Result<()> {
    let mut state = orchestrator.initial_state();

    if !messages.is_empty() {
        for message in messages {
            state = chat_turn(orchestrator, state, &message).await?;
        }
        return Ok(());
    }

    println!("{}", "Chat with your study coach (Ctrl-D to quit)".bold().blue());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        state = chat_turn(orchestrator, state, &line).await?;
    }
    Ok(())
}

/// Send one message and print the exchange. Blank messages print nothing.
async fn chat_turn(
    orchestrator: &LearnMateOrchestrator,
    state: AppState,
    message: &str,
) -> Result<AppState> {
    let (state, reply) = exchange(orchestrator, state, message).await?;
    if let Some(reply) = reply {
        println!("{} {}", "you:".cyan(), message);
        println!("{} {}\n", "coach:".green(), reply);
    }
    Ok(state)
}

/// The coach's reply to `message`, if it was not blank.
async fn exchange(
    orchestrator: &LearnMateOrchestrator,
    state: AppState,
    message: &str,
) -> Result<(AppState, Option<String>)> {
    let turn = orchestrator.send_chat(state, message).await?;
    Ok((turn.state, turn.reply.map(|reply| reply.text)))
}

/// Handle the 'catalog' command
fn handle_catalog(
    catalog: &Catalog,
    level: Option<String>,
    tag: Option<String>,
    json: bool,
) -> Result<()> {
    let level = level.as_deref().map(Level::from_label);
    let courses = filter_catalog(catalog, level, tag.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("{} of {} courses", courses.len(), catalog.len()).bold().blue()
    );
    for course in courses {
        println!(
            "{} {} [{}] {} - {:.1}★, {} students, ${:.2}",
            course.id.green(),
            course.title,
            course.level,
            course.platform,
            course.rating,
            course.students_count,
            course.price
        );
        println!("   {}", course.tags.join(", ").dimmed());
    }
    Ok(())
}

/// Courses at `level` with a tag matching `tag`, both optional.
///
/// The query and the tags are normalized like learner interests, so
/// `--tag "UI/UX"` finds the `uiux` courses.
fn filter_catalog<'a>(
    catalog: &'a Catalog,
    level: Option<Level>,
    tag: Option<&str>,
) -> Vec<&'a Course> {
    let query = tag.map(normalize_interest);
    catalog
        .iter()
        .filter(|course| level.is_none_or(|level| course.level == level))
        .filter(|course| {
            query.as_deref().is_none_or(|query| {
                course
                    .tags
                    .iter()
                    .any(|t| tag_matches_interest(&normalize_interest(t), query))
            })
        })
        .collect()
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    orchestrator: LearnMateOrchestrator,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }

    let profiles: Vec<LearnerProfile> = {
        let mut rng = rand::rng();
        (0..requests)
            .map(|_| {
                let count = rng.random_range(1..=3);
                let interests: Vec<&str> =
                    INTEREST_AREAS.choose_multiple(&mut rng, count).copied().collect();
                LearnerProfile::new(interests)
                    .with_level(Level::ALL[rng.random_range(0..Level::ALL.len())])
                    .with_available_time(
                        *[
                            TimeAvailability::PartTime,
                            TimeAvailability::FullTime,
                            TimeAvailability::Weekend,
                        ]
                        .choose(&mut rng)
                        .unwrap_or(&TimeAvailability::PartTime),
                    )
            })
            .collect()
    };

    let permits = Arc::new(Semaphore::new(concurrent.max(1)));
    let started = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for profile in profiles {
        let orchestrator = orchestrator.clone();
        let permits = permits.clone();
        handles.push(tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            orchestrator.recommend(profile).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        }));
    }

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let wall_time = started.elapsed();
    info!("Benchmark finished {} requests in {:?}", requests, wall_time);

    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg_latency = total / timings.len() as u32;
    let percentile = |p: f64| timings[((timings.len() as f64 * p) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Requests: {} ({} concurrent)", requests, concurrent.max(1));
    println!("Total time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.2} requests/second",
        requests as f64 / wall_time.as_secs_f64()
    );
    Ok(())
}

/// Format and print ranked recommendations
fn print_recommendations(recommendations: &Recommendations, explain: bool) {
    println!("{}", "Course Recommendations:".bold().blue());
    if recommendations.outcome == RecommendationOutcome::Fallback {
        println!(
            "{}",
            "No course matched your interests or level; showing the first catalog entries."
                .yellow()
        );
    }

    for (i, ranked) in recommendations.courses.iter().enumerate() {
        let course = &ranked.course;
        let score = ranked
            .score()
            .map(|s| format!("{:.1}", s))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}. {} [{}] on {} - Score: {}",
            (i + 1).to_string().green(),
            course.title,
            course.level,
            course.platform,
            score
        );
        if explain {
            if let Some(b) = &ranked.breakdown {
                println!(
                    "   interest {:.1} + level {:.1} + duration {:.1} + rating {:.1}",
                    b.interest, b.level, b.duration, b.rating
                );
            }
            println!("   Tags: {}", course.tags.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_orchestrator(max_history_length: usize) -> LearnMateOrchestrator {
        let mut config = AppConfig::default();
        config.chat.max_history_length = max_history_length;
        LearnMateOrchestrator::new(Arc::new(Catalog::builtin()), CoachService::offline(), config)
    }

    fn ids(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|course| course.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_replies_keep_coming_past_history_bound() {
        let orchestrator = offline_orchestrator(2);
        let mut state = orchestrator.initial_state();

        for message in ["hello", "help me", "how is my progress?"] {
            let (next, reply) = exchange(&orchestrator, state, message).await.unwrap();
            assert!(reply.is_some_and(|text| !text.is_empty()), "no reply to {message:?}");
            assert_eq!(next.conversation.len(), 2);
            state = next;
        }
    }

    #[tokio::test]
    async fn test_replies_with_zero_history() {
        let orchestrator = offline_orchestrator(0);
        let (state, reply) = exchange(&orchestrator, orchestrator.initial_state(), "hello")
            .await
            .unwrap();
        assert!(state.conversation.is_empty());
        assert!(reply.is_some());
    }

    #[tokio::test]
    async fn test_blank_message_has_no_reply() {
        let orchestrator = offline_orchestrator(50);
        let (state, reply) = exchange(&orchestrator, orchestrator.initial_state(), "  ")
            .await
            .unwrap();
        assert!(reply.is_none());
        assert!(state.conversation.is_empty());
    }

    #[test]
    fn test_tag_filter_normalizes_query_and_tags() {
        let catalog = Catalog::builtin();

        let data = filter_catalog(&catalog, None, Some("Data Science"));
        assert_eq!(ids(&data), vec!["python-datascience", "ml-basics"]);

        let uiux = filter_catalog(&catalog, None, Some("UI/UX"));
        assert_eq!(ids(&uiux), vec!["uiux-basics", "figma-design", "design-systems"]);
    }

    #[test]
    fn test_catalog_filters_combine() {
        let catalog = Catalog::builtin();
        assert_eq!(filter_catalog(&catalog, None, None).len(), catalog.len());

        let beginner_cloud = filter_catalog(&catalog, Some(Level::Beginner), Some("cloud"));
        assert_eq!(ids(&beginner_cloud), vec!["aws-basics", "azure-fundamentals"]);

        assert!(filter_catalog(&catalog, None, Some("!!!")).is_empty());
    }
}
