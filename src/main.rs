use std::path::PathBuf;

use clap::Parser;
use micasa::cli::commands::Cli;
use micasa::cli::handlers;
use micasa::io::config_io::read_config;
use micasa::io::data_io::load_household;
use micasa::logging;
use micasa::model::Household;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = read_config(cli.config.as_deref(), &cwd)?;

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.log.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(logging::default_log_path);
    let level = cli.log_level.as_deref().unwrap_or(&config.log.level);
    logging::init(&log_path, level)?;

    let household = match &cli.data {
        Some(path) => load_household(path)?,
        None => Household::demo(),
    };
    let show_deleted = cli.deleted || config.ui.show_deleted;

    match cli.command {
        // No subcommand → launch TUI
        None => micasa::tui::run(household, config, show_deleted),
        Some(command) => handlers::dispatch(command, cli.json, &household, &config, show_deleted),
    }
}
