//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Chemical equation balancing puzzle: step coefficients until both sides match
#[derive(Parser, Debug)]
#[command(name = "eqbalance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Additional config file (overrides the global config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively (default)
    Play {
        /// Problem number (default: config `default_problem`)
        problem: Option<usize>,
    },

    /// Pick a problem with a fuzzy finder, then play
    Select,

    /// List the problem catalog
    List,

    /// Render a problem board once
    Show {
        /// Problem number
        problem: usize,
        /// Coefficients, comma separated (default: all 1)
        #[arg(short, long, value_delimiter = ',')]
        coefficients: Vec<u32>,
    },

    /// Check coefficients (exit 0 when balanced, 1 when not)
    Check {
        /// Problem number
        problem: usize,
        /// Coefficients, comma separated, one per molecule
        #[arg(short, long, value_delimiter = ',', required = true)]
        coefficients: Vec<u32>,
    },

    /// Verify the catalog's reference answers
    Audit,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config paths
    Path,
}
