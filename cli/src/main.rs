//! Molvoc CLI - Command-line interface for the vocabulary generator.
//!
//! This is the main entry point for the `molvoc` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{InspectCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "molvoc")]
#[command(about = "A BPE-style vocabulary generator for chemical notations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a vocabulary from a corpus file
    Train(TrainCommand),
    /// Load a saved vocabulary artifact and display it
    Inspect(InspectCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Inspect(cmd) => commands::inspect::run(cmd)?,
    }

    Ok(())
}
