//! Creator Spark CLI
//!
//! # Responsibility
//! - Parse arguments, resolve runtime settings, dispatch one command.
//! - Own all terminal output and the process exit status.

use clap::{Parser, Subcommand};
use log::{error, info};
use spark_core::{JsonFileStore, RegistryService};

mod commands;
mod config;
mod render;

use config::{GlobalArgs, RuntimeConfig};

#[derive(Debug, Parser)]
#[command(name = "spark", version)]
#[command(about = "Creator Spark Registry - track which creators to cheer on", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List creators
    List(commands::list::ListArgs),
    /// Show quick stats
    Summary(commands::summary::SummaryArgs),
    /// Add a new creator
    Add(commands::add::AddArgs),
    /// Log that you amplified a creator
    Boost(commands::boost::BoostArgs),
    /// See who needs love next
    Agenda(commands::agenda::AgendaArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = &result {
        error!("event=cli_exit module=cli status=error error={}", e);
    }
    spark_core::flush_logging();

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::CommandResult {
    let config = RuntimeConfig::resolve(cli.global);
    config.init_logging()?;
    info!(
        "event=cli_start module=cli status=ok core_version={} data={} today={}",
        spark_core::core_version(),
        config.data_path.display(),
        config.today
    );

    let registry = RegistryService::new(JsonFileStore::new(&config.data_path), config.today);
    match cli.command {
        Commands::List(args) => commands::list::execute(args, &registry),
        Commands::Summary(args) => commands::summary::execute(args, &registry),
        Commands::Add(args) => commands::add::execute(args, &registry),
        Commands::Boost(args) => commands::boost::execute(args, &registry),
        Commands::Agenda(args) => commands::agenda::execute(args, &registry),
    }
}
