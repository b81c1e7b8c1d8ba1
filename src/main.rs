use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::PathBuf;

use toolrec::catalog::Catalog;
use toolrec::domain::{Category, GroupSize, LearningContext, LevelBucket, Recommendation, StudentProfile, Tool};
use toolrec::engine::RecommendationEngine;

mod cli;
mod config;
mod demo;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolrec")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolrec.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Load the catalog from the CLI flag, config, or built-in demo data
fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path = cli.catalog.as_ref().or(config.catalog.path.as_ref());
    match path {
        Some(path) => Catalog::from_file(path)
            .context(format!("Failed to load catalog from {}", path.display())),
        None => demo::sample_catalog().context("Failed to build demo catalog"),
    }
}

fn parse_level(value: &str) -> Result<LevelBucket> {
    match value {
        "below_grade" => Ok(LevelBucket::BelowGrade),
        "at_grade" => Ok(LevelBucket::AtGrade),
        "above_grade" => Ok(LevelBucket::AboveGrade),
        other => bail!("Unknown level '{}' (expected below_grade, at_grade, above_grade)", other),
    }
}

fn parse_group_size(value: &str) -> Result<GroupSize> {
    match value {
        "individual" => Ok(GroupSize::Individual),
        "small_group" => Ok(GroupSize::SmallGroup),
        "whole_class" => Ok(GroupSize::WholeClass),
        other => bail!("Unknown group size '{}' (expected individual, small_group, whole_class)", other),
    }
}

fn parse_category(value: &str) -> Result<Category> {
    match value {
        "assessment" => Ok(Category::Assessment),
        "interactive_learning" => Ok(Category::InteractiveLearning),
        "practice" => Ok(Category::Practice),
        "game_based" => Ok(Category::GameBased),
        "remediation" => Ok(Category::Remediation),
        "extension" => Ok(Category::Extension),
        other => bail!("Unknown category '{}'", other),
    }
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            // Default: run the demo recommendation pipeline
            handle_recommend_command(cli, config, &None, &None, &None, &[], &None)
        }
        Some(Commands::Recommend { level, time_available, group_size, standard, max }) => {
            handle_recommend_command(cli, config, level, time_available, group_size, standard, max)
        }
        Some(Commands::List { category, standard }) => {
            handle_list_command(cli, config, category.as_deref(), standard.as_deref())
        }
        Some(Commands::Show { id }) => handle_show_command(cli, config, id),
    }
}

fn handle_recommend_command(
    cli: &Cli,
    config: &Config,
    level: &Option<String>,
    time_available: &Option<u32>,
    group_size: &Option<String>,
    standards: &[String],
    max: &Option<usize>,
) -> Result<()> {
    let catalog = load_catalog(cli, config)?;

    let mut profile = demo::sample_profile();
    if let Some(level) = level {
        profile.current_level = parse_level(level)?;
    }

    let mut context = demo::sample_context();
    if let Some(minutes) = time_available {
        context.time_available = *minutes;
    }
    if let Some(size) = group_size {
        context.group_size = parse_group_size(size)?;
    }
    if !standards.is_empty() {
        context.standards_focus = standards.to_vec();
    }

    let max_recommendations = max.unwrap_or(config.engine.max_recommendations);

    info!(
        "Recommending for student {} with {} tools in catalog",
        profile.student_id,
        catalog.len()
    );

    let engine = RecommendationEngine::new(&catalog);
    let recommendations = engine
        .recommend(&profile, &context, max_recommendations)
        .context("Recommendation pipeline failed")?;

    render_recommendations(&profile, &context, &recommendations);
    Ok(())
}

fn render_recommendations(
    profile: &StudentProfile,
    context: &LearningContext,
    recommendations: &[Recommendation],
) {
    println!("\n{}", "=".repeat(60));
    println!("{}", "TOOL RECOMMENDATIONS".bold());
    println!("{}", "=".repeat(60));
    println!("Student: {}", profile.student_id);
    println!("Level: {}", profile.current_level);
    println!("Time Available: {} minutes", context.time_available);
    println!("Standards Focus: {}", context.standards_focus.join(", "));
    println!();

    if recommendations.is_empty() {
        println!("{}", "No tools fit this student and context.".yellow());
        return;
    }

    for rec in recommendations {
        let tool = &rec.tool;
        println!("{}. {}", rec.rank, tool.name.green().bold());
        println!("   Category: {}", tool.category);
        println!("   Time Required: {} minutes", tool.time_required);
        println!("   Effectiveness Score: {:.2}", rec.effectiveness_score);
        println!("   Reasoning: {}", rec.reasoning);
        println!("   Suggested Adaptations: {}", rec.adaptations.join(", "));
        println!("   Expected Outcomes: {}", rec.expected_outcomes.join(", "));
        println!("   Setup Time: {} minutes", rec.setup_time);
        println!("   Setup Instructions: {}", tool.setup_instructions);
        println!();
    }
}

fn handle_list_command(
    cli: &Cli,
    config: &Config,
    category: Option<&str>,
    standard: Option<&str>,
) -> Result<()> {
    info!("Listing tools - category: {:?}, standard: {:?}", category, standard);
    let catalog = load_catalog(cli, config)?;

    let tools: Vec<&Tool> = match (category, standard) {
        (Some(category), _) => catalog.by_category(parse_category(category)?),
        (None, Some(code)) => catalog.by_standard(code),
        (None, None) => catalog.iter().collect(),
    };

    if tools.is_empty() {
        println!("{}", "No matching tools.".yellow());
        return Ok(());
    }

    for tool in tools {
        println!(
            "{}  {} ({}, {} min, standards: {})",
            tool.id.cyan(),
            tool.name,
            tool.category,
            tool.time_required,
            tool.standards.join(", ")
        );
    }
    Ok(())
}

fn handle_show_command(cli: &Cli, config: &Config, id: &str) -> Result<()> {
    info!("Showing tool: {}", id);
    let catalog = load_catalog(cli, config)?;

    let Some(tool) = catalog.get(id) else {
        println!("{} {}", "Tool not found:".red(), id);
        return Ok(());
    };

    println!("{}", tool.name.green().bold());
    println!("  Id: {}", tool.id);
    println!("  Description: {}", tool.description);
    println!("  Category: {}", tool.category);
    println!("  Difficulty: {}", tool.difficulty);
    println!("  Standards: {}", tool.standards.join(", "));
    println!("  Time Required: {} minutes", tool.time_required);
    println!("  Materials: {}", tool.materials.join(", "));
    println!("  Prerequisites: {}", tool.prerequisites.join(", "));
    println!("  Learning Objectives: {}", tool.learning_objectives.join(", "));
    println!("  Setup: {}", tool.setup_instructions);
    if !tool.execution_steps.is_empty() {
        println!("  Steps:");
        for step in &tool.execution_steps {
            println!("    - {}", step);
        }
    }
    if !tool.variations.is_empty() {
        println!("  Variations: {}", tool.variations.join(", "));
    }
    if !tool.next_steps.is_empty() {
        println!("  Next Steps: {}", tool.next_steps.join(", "));
    }
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
