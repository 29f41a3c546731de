use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tango_config::Config;
use tracing_subscriber::EnvFilter;

pub mod commands;


use self::commands::check_duplicates::{CheckArgs, handle_check_duplicates};
use self::commands::insert::{InsertArgs, handle_insert};
use self::commands::remove::{RemoveArgs, handle_remove};
use self::commands::verify::handle_verify;

/// Maintain the vocabulary word list
#[derive(Parser)]
#[command(name = "tango", version)]
struct Cli {
    /// JSON config file, values not set there come from the environment
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Word list to operate on
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Insert a batch of words at a boundary id and shift the rest
    Insert(InsertArgs),
    /// Report words in an id range that duplicate words outside it
    CheckDuplicates(CheckArgs),
    /// Delete ids and renumber the list densely
    Remove(RemoveArgs),
    /// Check that ids are dense and ascending
    Verify,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    init_tracing(&config.log_filter);

    // No subcommand runs the default insert
    match cli.command.unwrap_or(Command::Insert(InsertArgs::default())) {
        Command::Insert(args) => {
            handle_insert(&config, &args)?;
        }
        Command::CheckDuplicates(args) => {
            handle_check_duplicates(&config, &args)?;
        }
        Command::Remove(args) => {
            handle_remove(&config, &args)?;
        }
        Command::Verify => {
            handle_verify(&config)?;
        }
    }

    Ok(())
}

fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
