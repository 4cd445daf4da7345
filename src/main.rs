mod cli;
mod commands;
mod config;
mod detector;
mod error;
mod lifecycle;
mod manifest;
mod paths;
mod purger;
mod store;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::{Cli, Command};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    match cli.command {
        Command::Scan { folder, days } => commands::scan::run(&folder, days),
        Command::Quarantine { paths, yes } => commands::quarantine::run(&paths, yes),
        Command::Purge { retention, yes } => commands::purge::run(retention, yes),
        Command::Status => commands::status::run(),
        Command::Init { force } => commands::init::run(force),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cleanshelf", &mut io::stdout());
            Ok(())
        }
    }
}
