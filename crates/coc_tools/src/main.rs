//! Clan progress calculator - command-line tools
//!
//! # Usage
//!
//! ```bash
//! # Check the catalog data files
//! coc-tools validate --data assets/data
//!
//! # Overview of a player's remaining upgrades
//! coc-tools progress assets/players/sample_player.json
//!
//! # One category, toward another Town Hall tier, as JSON
//! coc-tools progress player.json --tier 11 --category troops --json
//! ```
//!
//! Tables and JSON go to stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coc_core::data::Category;
use coc_core::summary::{category_breakdown, overview};
use coc_tools::config::ToolsConfig;
use coc_tools::loader::{load_catalog, load_snapshot, DataLoadError};
use coc_tools::report::{progress_title, render_table, JsonReport};
use coc_tools::validate::validate_data_directory;

#[derive(Parser)]
#[command(name = "coc-tools")]
#[command(about = "Unit progression calculator for Clash of Clans players")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog data files
    Validate {
        /// Path to data directory
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Show remaining upgrades for a player snapshot
    Progress {
        /// Player snapshot JSON file
        snapshot: PathBuf,

        /// Path to data directory
        #[arg(long)]
        data: Option<PathBuf>,

        /// Town Hall tier to compute toward (default: the player's own)
        #[arg(long)]
        tier: Option<u32>,

        /// Show one category unit by unit instead of the overview
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Heroes,
    Troops,
    Spells,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Heroes => Self::Hero,
            CategoryArg::Troops => Self::Troop,
            CategoryArg::Spells => Self::Spell,
        }
    }
}

fn progress(
    config: &ToolsConfig,
    snapshot: &std::path::Path,
    tier: Option<u32>,
    category: Option<CategoryArg>,
    json: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let catalog = load_catalog(&config.data_dir)?;
    let snapshot = load_snapshot(snapshot)?;

    let category = category.map(Category::from);
    let summary = match category {
        Some(category) => category_breakdown(&catalog, &snapshot, category, tier)?,
        None => overview(&catalog, &snapshot, tier)?,
    };

    for skipped in &summary.skipped {
        tracing::warn!("Skipped {}: {}", skipped.name, skipped.error);
    }

    if json {
        let report = JsonReport::new(&snapshot, &summary);
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format!(
            "{}\n\n{}",
            progress_title(&snapshot, category, summary.town_hall),
            render_table(&catalog, &summary)
        ))
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is for tables and JSON.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Validate { data } => {
            let config = ToolsConfig::from_env(data);
            tracing::info!("Validating data files in: {}", config.data_dir.display());
            match validate_data_directory(&config.data_dir) {
                Ok(()) => tracing::info!("Validation passed"),
                Err(DataLoadError::Validation { errors }) => {
                    for error in &errors {
                        tracing::error!("{error}");
                    }
                    tracing::error!("Validation failed with {} errors", errors.len());
                    std::process::exit(1);
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Progress {
            snapshot,
            data,
            tier,
            category,
            json,
        } => {
            let config = ToolsConfig::from_env(data);
            match progress(&config, &snapshot, tier, category, json) {
                Ok(output) => println!("{output}"),
                Err(e) => {
                    tracing::error!("Progress calculation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
