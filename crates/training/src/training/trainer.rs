//! Vocabulary training loop.
//!
//! Drives N rounds of collect -> select -> record -> apply over the whole
//! corpus, owning the vocabulary, the merge list, and every token sequence
//! for the duration of the run.

use super::applier::merge_pair;
use super::selector::select_best;
use super::stats::PairStatsCollector;
use molvoc_core::{FrequencyTable, MergeRule, Result, TokenSequence};
use molvoc_tokenizer::{Grammar, Tokenizer};

/// Configuration for a training run.
///
/// An explicit immutable value; the reference program's process-wide format
/// flag and output path are not reproduced here.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Token grammar for the corpus
    pub grammar: Grammar,
    /// Requested number of merge rounds (0 is valid)
    pub num_merges: usize,
    /// Shard the pair-statistics scan across rayon workers
    pub parallel: bool,
}

/// Vocabulary trainer.
///
/// Induces a subword vocabulary from a line-delimited corpus by iteratively
/// merging the most frequent adjacent token pair.
pub struct VocabTrainer {
    config: TrainingConfig,
}

impl VocabTrainer {
    /// Create a trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Train on a newline-delimited corpus.
    ///
    /// Returns the token -> count vocabulary and the merge rules in
    /// discovery order. The merge list is shorter than the requested round
    /// count when statistics run dry early; that is a successful outcome,
    /// distinguishable only by comparing the list length to the request.
    pub fn train(&self, corpus: &str) -> Result<(FrequencyTable, Vec<MergeRule>)> {
        let tokenizer = Tokenizer::new(self.config.grammar);

        // Blank lines are skipped entirely; every other line's sequence is
        // held for the whole run, even when it tokenized to nothing.
        let mut sequences: Vec<TokenSequence> = corpus
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| tokenizer.tokenize(line))
            .collect();

        let mut vocab = FrequencyTable::new()?;
        for sequence in &sequences {
            for token in sequence {
                vocab.insert_or_increment(token)?;
            }
        }

        let collector = if self.config.parallel {
            PairStatsCollector::parallel()
        } else {
            PairStatsCollector::new()
        };

        let mut merges: Vec<MergeRule> = Vec::with_capacity(self.config.num_merges);

        for _round in 0..self.config.num_merges {
            let stats = collector.collect(&sequences)?;

            // An empty table means no sequence still has two tokens:
            // normal early termination, not an error.
            let best = match select_best(&stats) {
                Some(best) => best,
                None => break,
            };
            let rule = match MergeRule::from_pair_key(&best.key) {
                Some(rule) => rule,
                None => break,
            };

            merges.push(rule.clone());

            // Overwrite accounting: the merged token's stored count is this
            // round's pair frequency, even when the token string already
            // existed from an earlier round.
            vocab.set_count(&rule.merged, best.count)?;

            for sequence in sequences.iter_mut() {
                *sequence = merge_pair(sequence, &rule);
            }
        }

        Ok((vocab, merges))
    }
}
