//! Inspect command implementation.

use clap::Parser;

/// Inspect command arguments.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to a saved vocabulary artifact
    pub path: String,

    /// Treat the artifact as a JSON index map instead of the plain format
    #[arg(short, long, default_value_t = false)]
    pub json: bool,

    /// Maximum number of vocabulary entries to display
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

use anyhow::Result as AnyhowResult;
use molvoc_tokenizer::VocabLoader;
use std::path::Path;

pub fn run(cmd: InspectCommand) -> AnyhowResult<()> {
    let path = Path::new(&cmd.path);

    println!("Loading vocabulary from {}", cmd.path);
    let (vocab, merges) = if cmd.json {
        VocabLoader::load_json(path)?
    } else {
        VocabLoader::load_plain(path)?
    };

    println!("Loaded {} merge operations:", merges.len());
    for (i, rule) in merges.iter().enumerate() {
        println!("  {}. {}", i + 1, rule.pair_key());
    }

    println!();
    println!(
        "Loaded vocabulary (showing first {} entries):",
        cmd.limit.min(vocab.len())
    );
    for (token, count) in vocab.iter().take(cmd.limit) {
        println!("  - {}: {}", token, count);
    }
    println!("Total vocabulary size: {} tokens", vocab.len());

    Ok(())
}
