//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the corpus file (one sequence per line)
    #[arg(short, long)]
    pub input: String,

    /// Output directory for vocabulary artifacts, created if absent
    #[arg(short, long, default_value = ".")]
    pub output: String,

    /// Number of merge rounds
    #[arg(short, long)]
    pub num_merges: usize,

    /// Input format: 'smiles' or 'selfies'
    #[arg(short = 't', long = "type", default_value = "selfies")]
    pub format: String,

    /// Shard pair statistics across worker threads
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,
}

use anyhow::Result as AnyhowResult;
use molvoc_core::VocabError;
use molvoc_tokenizer::io::{freq_artifact_name, index_artifact_name, plain_artifact_name};
use molvoc_tokenizer::{Grammar, VocabSaver};
use molvoc_training::{TrainingConfig, VocabTrainer};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    let grammar: Grammar = cmd.format.parse()?;

    println!("Training vocabulary...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Merge rounds: {}", cmd.num_merges);
    println!("  Format: {}", grammar);
    println!();

    // Read corpus
    let start = Instant::now();
    let corpus = fs::read_to_string(&cmd.input).map_err(|e| VocabError::io(&cmd.input, e))?;
    println!(
        "Read {} bytes in {:.2}s",
        corpus.len(),
        start.elapsed().as_secs_f64()
    );

    // Train
    let trainer = VocabTrainer::new(TrainingConfig {
        grammar,
        num_merges: cmd.num_merges,
        parallel: cmd.parallel,
    });
    let start = Instant::now();
    let (vocab, merges) = trainer.train(&corpus)?;
    println!(
        "Training completed in {:.2}s",
        start.elapsed().as_secs_f64()
    );
    println!("  Vocabulary size: {} tokens", vocab.len());
    if merges.len() < cmd.num_merges {
        println!(
            "  Statistics ran dry after {} of {} requested merges",
            merges.len(),
            cmd.num_merges
        );
    } else {
        println!("  Recorded {} merges", merges.len());
    }
    println!();

    // Save artifacts
    let output_dir = Path::new(&cmd.output);
    fs::create_dir_all(output_dir).map_err(|e| VocabError::io(output_dir, e))?;

    let saver = VocabSaver::new(&vocab, &merges);
    let plain_path = output_dir.join(plain_artifact_name(cmd.num_merges));
    let index_path = output_dir.join(index_artifact_name(cmd.num_merges));
    let freq_path = output_dir.join(freq_artifact_name(cmd.num_merges));

    saver.save_plain(&plain_path)?;
    saver.save_json(&index_path, &freq_path)?;

    println!("Vocabulary saved to {}", plain_path.display());
    println!(
        "JSON vocabulary saved to {} and {}",
        index_path.display(),
        freq_path.display()
    );

    Ok(())
}
