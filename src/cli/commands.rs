//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - recommend: run the recommendation pipeline for a student
//! - list: list catalog tools, optionally by category or standard
//! - show: print one tool's full record

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolrec - educational tool recommendations for lesson planning
#[derive(Parser, Debug)]
#[command(name = "toolrec")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Optional catalog JSON file (defaults to the built-in demo catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recommend tools for a student and lesson context
    Recommend {
        /// Student level (below_grade, at_grade, above_grade)
        #[arg(short, long)]
        level: Option<String>,

        /// Minutes available in the session
        #[arg(short, long)]
        time_available: Option<u32>,

        /// Group size (individual, small_group, whole_class)
        #[arg(short, long)]
        group_size: Option<String>,

        /// Target standard codes (repeatable)
        #[arg(short, long)]
        standard: Vec<String>,

        /// Maximum number of recommendations
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// List catalog tools
    List {
        /// Filter by category (assessment, practice, game_based, ...)
        #[arg(long)]
        category: Option<String>,

        /// Filter by standard code
        #[arg(long)]
        standard: Option<String>,
    },

    /// Show one tool's full record
    Show {
        /// Tool id to display
        id: String,
    },
}
