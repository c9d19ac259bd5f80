//! Adjacent-pair frequency counting.
//!
//! One statistics table is built per training round and discarded after the
//! best pair is selected. Pair counts are associative and commutative, so
//! the corpus scan can also be sharded across rayon workers and reduced by
//! key without changing the result.

use molvoc_core::{pair_key, FrequencyTable, Result, TokenSequence};
use rayon::prelude::*;

/// Sequences per rayon shard in the parallel path.
const SHARD_SIZE: usize = 1024;

/// Collector for adjacent-token-pair frequencies across a corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairStatsCollector {
    parallel: bool,
}

impl PairStatsCollector {
    /// Create a sequential collector (the reference path).
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Create a collector that shards the corpus scan across rayon workers.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Count every adjacent ordered pair across all sequences.
    ///
    /// Sequences with fewer than two tokens contribute nothing. Keys are the
    /// two token strings joined by a single space; the tokenizer guarantees
    /// tokens never contain a space byte.
    pub fn collect(&self, sequences: &[TokenSequence]) -> Result<FrequencyTable> {
        if self.parallel {
            self.collect_parallel(sequences)
        } else {
            self.collect_sequential(sequences)
        }
    }

    fn collect_sequential(&self, sequences: &[TokenSequence]) -> Result<FrequencyTable> {
        let mut stats = FrequencyTable::new()?;
        for sequence in sequences {
            count_pairs(&mut stats, sequence)?;
        }
        Ok(stats)
    }

    fn collect_parallel(&self, sequences: &[TokenSequence]) -> Result<FrequencyTable> {
        let partials: Vec<FrequencyTable> = sequences
            .par_chunks(SHARD_SIZE)
            .map(|shard| {
                let mut partial = FrequencyTable::new()?;
                for sequence in shard {
                    count_pairs(&mut partial, sequence)?;
                }
                Ok(partial)
            })
            .collect::<Result<_>>()?;

        let mut stats = FrequencyTable::new()?;
        for partial in partials {
            stats.merge_from(partial)?;
        }
        Ok(stats)
    }
}

fn count_pairs(stats: &mut FrequencyTable, sequence: &TokenSequence) -> Result<()> {
    if sequence.len() < 2 {
        return Ok(());
    }
    for window in sequence.windows(2) {
        stats.insert_or_increment(&pair_key(&window[0], &window[1]))?;
    }
    Ok(())
}
