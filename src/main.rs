//! Comeback coach: AI-powered career comeback assistant

use clap::Parser;
use colored::Colorize;
use comeback_coach::cli::{self, Cli, Commands, ConfigAction, SessionAction};
use comeback_coach::config::{Config, OutputFormat};
use comeback_coach::error::{CoachError, Result};
use comeback_coach::input::{InputManager, ResumeSource};
use comeback_coach::interview::{self, FeedbackSummary, InterviewTranscript};
use comeback_coach::llm::CareerCoach;
use comeback_coach::output::{save_report_to_file, ReportGenerator};
use comeback_coach::session::{InterviewMode, SessionStep, SessionStore, SessionUpdate};
use indicatif::ProgressBar;
use log::{error, info};
use std::io::{BufRead, Write};
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            text,
            weeks,
            output,
            save,
            demo,
            force,
        } => {
            info!("Starting skill gap analysis");

            let source = match (resume, text) {
                (Some(path), None) => {
                    cli::validate_file_extension(&path, &["pdf", "txt", "md"])
                        .map_err(|e| CoachError::InvalidInput(format!("Resume file: {}", e)))?;
                    ResumeSource::File(path)
                }
                (None, Some(text)) => ResumeSource::Inline(text),
                _ => {
                    return Err(CoachError::InvalidInput(
                        "Provide a resume with --resume <file> or --text \"...\"".to_string(),
                    ))
                }
            };

            let output_format = resolve_output_format(output.as_deref(), &config)?;

            let mut session = SessionStore::open_default();
            if session.has_unfinished_work() && !force {
                println!(
                    "⚠️  You have an active session at step '{}'.",
                    session.state().current_step
                );
                println!("   Starting over will lose that progress. Re-run with --force to discard it,");
                println!("   or pick it back up with `comeback-coach roadmap` / `comeback-coach interview`.");
                return Err(CoachError::Session(
                    "An active session is in progress".to_string(),
                ));
            }

            println!("🚀 Career comeback analysis");
            match &source {
                ResumeSource::File(path) => println!("📄 Resume: {}", path.display()),
                ResumeSource::Inline(_) => println!("📄 Resume: (inline text)"),
            }
            println!("🗓  Roadmap length: {} weeks", weeks);

            // Ingest the resume
            let mut input_manager = InputManager::new();
            let payload = input_manager.resolve(&source).await?;
            if payload.is_file() {
                println!("📎 Resume will be sent to the model as an attached document");
            }

            // A fresh resume replaces whatever session came before
            session.clear()?;
            session.set_resume(payload.to_session_string(), weeks)?;
            session.start_session(SessionStep::Analyzing)?;

            let mut coach = CareerCoach::new(&config, demo);
            if coach.is_demo() {
                println!("🎭 Demo mode: showing canned results (no API key configured)");
            }

            // Step 1: skill analysis
            let spinner = ProgressBar::new_spinner();
            spinner.enable_steady_tick(Duration::from_millis(120));
            spinner.set_message("Analyzing your skills and experience...");

            let analysis = match coach
                .analyze_resume(&payload, &mut |chunk| {
                    spinner.set_message(progress_message(chunk))
                })
                .await
            {
                Ok(analysis) => analysis,
                Err(e) => {
                    spinner.finish_and_clear();
                    return Err(report_failure(e, &mut session));
                }
            };
            session.update(SessionUpdate {
                analysis_result: Some(analysis.clone()),
                ..Default::default()
            })?;

            // Step 2: roadmap generation
            spinner.set_message("Creating your personalized roadmap...");
            let roadmap = match coach
                .generate_roadmap(&analysis, weeks, &mut |chunk| {
                    spinner.set_message(progress_message(chunk))
                })
                .await
            {
                Ok(roadmap) => roadmap,
                Err(e) => {
                    spinner.finish_and_clear();
                    return Err(report_failure(e, &mut session));
                }
            };
            spinner.finish_and_clear();

            session.update(SessionUpdate {
                roadmap_data: Some(roadmap.clone()),
                current_step: Some(SessionStep::Roadmap),
                ..Default::default()
            })?;

            // Present results
            let use_colors =
                config.output.color_output && output_format == OutputFormat::Console;
            let generator = ReportGenerator::with_options(use_colors, true, true);
            println!("{}", generator.generate_analysis(&analysis, output_format)?);
            println!("{}", generator.generate_roadmap(&roadmap, output_format)?);

            if let Some(path) = save {
                let file_generator = ReportGenerator::with_options(false, true, true);
                let content = file_generator.generate_roadmap(&roadmap, output_format)?;
                save_report_to_file(&content, &path)?;
                println!("📄 Roadmap saved to {}", path.display());
            }

            println!("✅ Analysis complete!");
            println!("💡 Next: `comeback-coach roadmap --output html --save roadmap.html` for a printable copy,");
            println!("   or `comeback-coach interview` to practice for it.");
        }

        Commands::Roadmap { output, save } => {
            let output_format = resolve_output_format(output.as_deref(), &config)?;

            let session = SessionStore::open_default();
            let Some(roadmap) = session.state().roadmap_data.clone() else {
                println!("📭 No roadmap in the current session.");
                println!("💡 Run `comeback-coach analyze` first.");
                return Err(CoachError::Session("No roadmap available".to_string()));
            };

            if let Some(path) = save {
                let generator = ReportGenerator::with_options(false, true, true);
                let content = generator.generate_roadmap(&roadmap, output_format)?;
                save_report_to_file(&content, &path)?;
                println!("📄 Roadmap saved to {}", path.display());
            } else {
                let use_colors =
                    config.output.color_output && output_format == OutputFormat::Console;
                let generator = ReportGenerator::with_options(use_colors, true, true);
                println!("{}", generator.generate_roadmap(&roadmap, output_format)?);
            }
        }

        Commands::Interview { duration, demo } => {
            let mut session = SessionStore::open_default();
            let roadmap = session.state().roadmap_data.clone();
            let context = interview::goal_context(roadmap.as_ref());

            session.update(SessionUpdate {
                has_active_session: Some(true),
                current_step: Some(SessionStep::Interview),
                interview_mode: Some(InterviewMode::Text),
                ..Default::default()
            })?;

            let mut coach = CareerCoach::new(&config, demo);
            if coach.is_demo() {
                println!("🎭 Demo mode: interview replies are canned (no API key configured)");
            }

            let total = Duration::from_secs(duration.unwrap_or(config.interview.duration_secs));
            let started = Instant::now();

            println!("\n🎤 {}", "Mock interview".bold());
            println!("   Answer in the prompt below; type 'exit' to finish early.\n");

            let mut transcript = InterviewTranscript::new();
            let opening = interview::opening_question(roadmap.as_ref());
            println!("🧑‍💼 {}\n", opening);
            transcript.push_assistant(opening);

            let stdin = std::io::stdin();
            loop {
                let remaining = total.saturating_sub(started.elapsed());
                if remaining.is_zero() {
                    println!("\n⏰ Time is up!");
                    break;
                }

                print!("[{}] 🗣  ", interview::format_duration(remaining.as_secs()));
                std::io::stdout().flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    // EOF ends the interview
                    println!();
                    break;
                }
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
                    break;
                }

                let history = transcript.history();
                transcript.push_user(input);

                match coach.interview_turn(&context, &history, input).await {
                    Ok(reply) => {
                        println!("🧑‍💼 {}\n", reply);
                        transcript.push_assistant(reply);
                    }
                    Err(CoachError::RateLimited(msg)) => {
                        println!("⏳ {}\n", msg);
                    }
                    Err(e) => return Err(e),
                }
            }

            print_feedback(
                &FeedbackSummary::standard(),
                config.output.color_output,
                transcript.user_turns(),
                started.elapsed(),
            );

            session.update(SessionUpdate {
                current_step: Some(SessionStep::Interview),
                ..Default::default()
            })?;
        }

        Commands::Session { action } => {
            let mut session = SessionStore::open_default();
            match action {
                SessionAction::Show => {
                    println!("📦 Session slot: {}", session.path().display());
                    println!("{}", serde_json::to_string_pretty(session.state())?);
                }
                SessionAction::Status => {
                    let state = session.state();
                    if !state.has_active_session {
                        println!("💤 No active session");
                    } else {
                        println!(
                            "▶️  Active session at step '{}' ({} analysis, {} roadmap)",
                            state.current_step,
                            if state.analysis_result.is_some() { "with" } else { "no" },
                            if state.roadmap_data.is_some() { "with" } else { "no" },
                        );
                    }
                }
                SessionAction::Clear => {
                    session.clear()?;
                    println!("🗑  Session cleared");
                }
                SessionAction::Restore { file } => {
                    session.restore_roadmap(&file)?;
                    println!("📂 Session restored from {}", file.display());
                    println!("💡 Jump back in with `comeback-coach interview`.");
                }
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Model: {}", config.service.model);
                    println!(
                        "API key: {}",
                        if config.resolve_api_key().is_some() {
                            "configured"
                        } else {
                            "not configured (demo mode)"
                        }
                    );
                    println!("Demo mode forced: {}", config.service.demo_mode);
                    println!("\nRate Limits:");
                    println!(
                        "  Analysis: {} calls / {}s",
                        config.limits.analysis_max_requests, config.limits.window_secs
                    );
                    println!(
                        "  Chat: {} calls / {}s",
                        config.limits.chat_max_requests, config.limits.window_secs
                    );
                    println!("\nInterview duration: {}s", config.interview.duration_secs);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    let mut config = config;
                    config.set(&key, &value)?;
                    config.save()?;
                    println!("🔧 Set {}: {}", key, value);
                }
            }
        }
    }

    Ok(())
}

/// The --output flag wins; otherwise the configured default format applies.
fn resolve_output_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(format) => cli::parse_output_format(format).map_err(CoachError::InvalidInput),
        None => Ok(config.output.format),
    }
}

/// Turn a progress chunk (narration line or raw stream delta) into a short
/// spinner message.
fn progress_message(chunk: &str) -> String {
    let line = chunk
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("")
        .trim();
    if line.is_empty() {
        return "Receiving response...".to_string();
    }
    line.chars().take(64).collect()
}

/// Print user guidance for the errors the pipeline surfaces, and roll the
/// session back a step when the input itself was rejected.
fn report_failure(e: CoachError, session: &mut SessionStore) -> CoachError {
    match &e {
        CoachError::InvalidResume(msg) => {
            println!("🙁 {}", msg);
            println!("💡 The input was not recognized as a resume. Paste your actual resume text");
            println!("   or point --resume at the file, then try again.");
            let _ = session.update(SessionUpdate {
                current_step: Some(SessionStep::ResumeInput),
                ..Default::default()
            });
        }
        CoachError::RateLimited(msg) => {
            println!("⏳ {}", msg);
        }
        _ => {}
    }
    e
}

fn print_feedback(summary: &FeedbackSummary, use_colors: bool, turns: usize, elapsed: Duration) {
    let score_line = |score: u8| -> String {
        let text = format!("{}%", score);
        if !use_colors {
            return text;
        }
        match score {
            80..=100 => text.green().to_string(),
            60..=79 => text.yellow().to_string(),
            _ => text.red().to_string(),
        }
    };

    println!("\n📋 {}", "Interview feedback".bold());
    println!(
        "Answered {} question{} in {}",
        turns,
        if turns == 1 { "" } else { "s" },
        interview::format_duration(elapsed.as_secs())
    );
    println!("Overall score: {}", score_line(summary.overall_score));

    for section in &summary.sections {
        println!(
            "\n{} - {}/{}",
            section.title.bold(),
            score_line(section.score),
            section.max_score
        );
        println!("  {}", section.feedback);
        for highlight in &section.highlights {
            println!("  ✅ {}", highlight);
        }
        for improvement in &section.improvements {
            println!("  🎯 {}", improvement);
        }
    }

    println!("\n💡 Retake any time with `comeback-coach interview`.");
}
