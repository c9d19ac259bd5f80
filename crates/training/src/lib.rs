//! Molvoc-training - Greedy pair-merge training
//!
//! This crate drives vocabulary induction: tokenize the corpus once, then
//! repeatedly count adjacent pairs, pick the most frequent one, record the
//! merge, and rewrite every sequence.
//!
//! # Example
//!
//! ```rust
//! use molvoc_tokenizer::Grammar;
//! use molvoc_training::{TrainingConfig, VocabTrainer};
//!
//! let trainer = VocabTrainer::new(TrainingConfig {
//!     grammar: Grammar::Selfies,
//!     num_merges: 1,
//!     parallel: false,
//! });
//! let (vocab, merges) = trainer.train("[C][C][N][O][C][C]")?;
//! assert_eq!(merges.len(), 1);
//! assert_eq!(vocab.find("[C][C]"), Some(2));
//! # Ok::<(), molvoc_training::VocabError>(())
//! ```

pub use molvoc_core::{Result, VocabError};

// Training infrastructure
pub mod training;
pub use training::{
    merge_pair, select_best, BestPair, PairStatsCollector, TrainingConfig, VocabTrainer,
};
