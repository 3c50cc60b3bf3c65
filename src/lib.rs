//! ttpro library root.
//! Exposes the CLI parser, the high-level run() function, the pure
//! application core (search, routing, session reducer) and its adapters.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command),
        Commands::Theme { .. } => cli::commands::theme::handle(&cli.command, cfg),
        Commands::Shell => cli::commands::shell::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
