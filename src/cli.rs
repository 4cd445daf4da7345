use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cleanshelf")]
#[command(version)]
#[command(about = "Find unused files, quarantine them, and purge the quarantine after a retention window", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List files in a folder that haven't been accessed recently
    Scan {
        /// Folder to scan recursively
        folder: PathBuf,

        /// Age threshold in days (defaults from config)
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Move files into the quarantine directory
    Quarantine {
        /// Files to quarantine
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Permanently delete quarantined files past the retention window
    Purge {
        /// Retention window in days (defaults from config)
        #[arg(short, long)]
        retention: Option<u32>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the quarantine directory and manifest state
    Status,

    /// Create a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
