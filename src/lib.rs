//! jotter - export structured notes to text, HTML and PDF

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    handlers::{handle_completions, handle_export},
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Export(args) => handle_export(args),
        Command::Completions(args) => handle_completions(args),
    }
}
