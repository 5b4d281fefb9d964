//! Command-line entry point for the career path pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Build the registry on first run
//! draft-career-paths init
//!
//! # Append newly drafted players
//! draft-career-paths reconcile --novelty per-year-key
//!
//! # Refresh placements for some draft years
//! draft-career-paths update --years 2019,2021-2023
//!
//! # Rebuild the enriched table and print the country summary
//! draft-career-paths build --summary
//! ```
//!
//! Exit status is non-zero only when a step cannot complete: the registry
//! source is unavailable or unparsable, or storage fails.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use draft_career_paths::application::services::{
    CareerPathService, CountrySummary, InitOutcome, PlacementService, RegistryService,
    StatsService, UpdateReport,
};
use draft_career_paths::config::{Config, load_from_env};
use draft_career_paths::domain::reconciler::NoveltyRule;
use draft_career_paths::infrastructure::persistence::json_file::write_json_atomic;
use draft_career_paths::infrastructure::persistence::{
    CAREER_PATHS_FILE, JsonMappingRepository, JsonPlacementRepository, JsonRegistryRepository,
};
use draft_career_paths::infrastructure::sources::{FsPlacementSource, HttpRegistrySource};
use draft_career_paths::utils::iso3166::Iso3166;
use draft_career_paths::utils::year_list::parse_year_list;

/// Builds and maintains the post-draft career path dataset.
#[derive(Parser)]
#[command(name = "draft-career-paths")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the draft registry from scratch (first run only)
    Init {
        /// Overwrite an existing registry, losing curated identifiers
        #[arg(short, long)]
        force: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Append newly drafted players to the registry
    Reconcile {
        /// Novelty rule: year-and-pick or per-year-key
        #[arg(long)]
        novelty: Option<NoveltyRule>,
    },

    /// Refresh placement batches for draft years
    Update {
        /// Years to refresh, e.g. "2019,2021-2023" (default: FIRST_DRAFT_YEAR to this year)
        #[arg(long)]
        years: Option<String>,
    },

    /// Build the enriched career path table
    Build {
        /// Output file (default: <DATA_DIR>/career_paths.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print entrants per country and years since draft
        #[arg(long)]
        summary: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Init { force, yes } => handle_init(&config, force, yes).await?,
        Commands::Reconcile { novelty } => {
            handle_reconcile(&config, novelty.unwrap_or(config.novelty_rule)).await?
        }
        Commands::Update { years } => handle_update(&config, years.as_deref()).await?,
        Commands::Build { output, summary } => handle_build(&config, output, summary).await?,
    }

    Ok(())
}

/// Installs the global tracing subscriber on stderr.
///
/// `RUST_LOG` directives win; otherwise the configured level applies.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn registry_service(
    config: &Config,
) -> Result<RegistryService<JsonRegistryRepository, HttpRegistrySource>> {
    let source = HttpRegistrySource::new(
        config.registry_url.clone(),
        config.request_timeout(),
        config.fetch_retries,
    )
    .map_err(|e| anyhow::anyhow!("Failed to build registry client: {}", e))?;

    Ok(RegistryService::new(
        Arc::new(JsonRegistryRepository::in_dir(&config.data_dir)),
        Arc::new(source),
    ))
}

/// Creates the registry, asking before an overwrite.
async fn handle_init(config: &Config, force: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "Initialise draft registry".bright_blue().bold());
    println!();

    if force && !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Overwrite the registry? Curated identifiers will be lost")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let service = registry_service(config)?;
    let outcome = service
        .initialize(force)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialise registry: {}", e))?;

    match outcome {
        InitOutcome::Written(count) => {
            println!(
                "{} {} entrants written",
                "Registry created:".green().bold(),
                count.to_string().bright_white().bold()
            );
        }
        InitOutcome::AlreadyPresent(count) => {
            println!(
                "{} registry already holds {} entrants",
                "Skipped:".yellow().bold(),
                count.to_string().bright_white().bold()
            );
            println!("  Use {} to overwrite it", "--force".bright_cyan());
        }
    }
    println!();

    Ok(())
}

/// Appends new entrants and lists the ones needing curation.
async fn handle_reconcile(config: &Config, rule: NoveltyRule) -> Result<()> {
    println!("{}", "Reconcile draft registry".bright_blue().bold());
    println!("  Novelty rule: {}", rule.to_string().cyan());
    println!();

    let service = registry_service(config)?;
    let report = service
        .reconcile(rule)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to reconcile registry: {}", e))?;

    if report.added.is_empty() {
        println!("{}", "  Registry is up to date".green());
    } else {
        println!(
            "  {:<6} {:<6} {}",
            "Year".bright_white().bold(),
            "Pick".bright_white().bold(),
            "Name".bright_white().bold()
        );
        println!("  {}", "─".repeat(50).bright_black());
        for entrant in &report.added {
            println!(
                "  {:<6} {:<6} {}",
                entrant.draft_year,
                entrant.overall_pick,
                entrant.name.cyan()
            );
        }
        println!();
        println!(
            "{}",
            "  New entrants have no external ID yet; add them before updating placements"
                .yellow()
        );
    }

    println!();
    println!(
        "  Entrants: {} → {} ({} added)",
        report.before,
        report.after.to_string().bright_white().bold(),
        report.added.len().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Refreshes placement batches for the requested years.
async fn handle_update(config: &Config, years: Option<&str>) -> Result<()> {
    let years = match years {
        Some(list) => parse_year_list(list).context("Invalid --years")?,
        None => config.default_update_years(),
    };

    println!("{}", "Update placement batches".bright_blue().bold());
    println!();

    let service = PlacementService::new(
        Arc::new(JsonRegistryRepository::in_dir(&config.data_dir)),
        Arc::new(JsonPlacementRepository::in_dir(&config.data_dir)),
        Arc::new(FsPlacementSource::new(config.placement_source_dir.clone())),
    );

    let report = service
        .update_draft_years(&years)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update placements: {}", e))?;

    print_update_report(&report);

    Ok(())
}

fn print_update_report(report: &UpdateReport) {
    println!(
        "  {:<6} {:<10} {:<12} {}",
        "Year".bright_white().bold(),
        "Entrants".bright_white().bold(),
        "Placements".bright_white().bold(),
        "No data".bright_white().bold()
    );
    println!("  {}", "─".repeat(45).bright_black());
    for update in &report.updated {
        println!(
            "  {:<6} {:<10} {:<12} {}",
            update.draft_year,
            update.entrants,
            update.placements.to_string().bright_green(),
            update.without_data.to_string().bright_black()
        );
    }

    if !report.unknown_years.is_empty() {
        println!();
        let years: Vec<String> = report.unknown_years.iter().map(i32::to_string).collect();
        println!(
            "  {} {}",
            "Not in registry:".yellow().bold(),
            years.join(", ")
        );
    }

    if !report.skipped.is_empty() {
        println!();
        println!("  {}", "Skipped entrants:".yellow().bold());
        for skipped in &report.skipped {
            println!(
                "    {} {} (ID: {}): {}",
                skipped.draft_year,
                skipped.name.cyan(),
                skipped.external_id,
                skipped.reason.bright_black()
            );
        }
    }
    println!();
}

/// Builds and writes the enriched career path table.
async fn handle_build(config: &Config, output: Option<PathBuf>, summary: bool) -> Result<()> {
    println!("{}", "Build career paths".bright_blue().bold());
    println!();

    let service = CareerPathService::new(
        Arc::new(JsonRegistryRepository::in_dir(&config.data_dir)),
        Arc::new(JsonPlacementRepository::in_dir(&config.data_dir)),
        Arc::new(JsonMappingRepository::in_dir(&config.data_dir)),
        Iso3166,
    );

    let aggregation = service
        .build()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build career paths: {}", e))?;

    let output = output.unwrap_or_else(|| config.data_dir.join(CAREER_PATHS_FILE));
    write_json_atomic(&output, &aggregation.rows)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", output.display(), e))?;

    println!(
        "  Rows:            {}",
        aggregation.rows.len().to_string().bright_green().bold()
    );
    println!("  Unjoined:        {}", aggregation.unjoined);
    println!("  Invalid seasons: {}", aggregation.invalid_seasons);
    println!("  Outside window:  {}", aggregation.outliers);
    println!("  Duplicates:      {}", aggregation.duplicates);
    println!("  New mappings:    {}", aggregation.new_mappings.len());
    println!("  Written to:      {}", output.display().to_string().cyan());

    if !aggregation.unresolved.is_empty() {
        println!();
        println!("  {}", "Unresolved league prefixes:".yellow().bold());
        for prefix in &aggregation.unresolved {
            println!("    {}", prefix);
        }
    }
    println!();

    if summary {
        print_country_summary(&StatsService::country_counts_by_year(&aggregation.rows));
    }

    Ok(())
}

fn print_country_summary(summary: &CountrySummary) {
    println!("{}", "Entrants per country".bright_blue().bold());
    if let (Some(min), Some(max)) = (summary.min_draft_year, summary.max_draft_year) {
        println!("  Drafts {}-{}", min, max);
    }
    println!();

    if summary.counts.is_empty() {
        println!("{}", "  No rows with a resolved country".yellow());
        println!();
        return;
    }

    println!(
        "  {:<7} {:<6} {:<35} {}",
        "Years".bright_white().bold(),
        "Code".bright_white().bold(),
        "Country".bright_white().bold(),
        "Entrants".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());
    for count in &summary.counts {
        println!(
            "  {:<7} {:<6} {:<35} {}",
            count.years_from_draft,
            count.alpha3.cyan(),
            count.name,
            count.count.to_string().bright_green()
        );
    }
    println!();
}
