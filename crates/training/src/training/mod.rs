//! Training pipeline: statistics, selection, application, orchestration.

pub mod applier;
pub mod selector;
pub mod stats;
pub mod trainer;

pub use applier::merge_pair;
pub use selector::{select_best, BestPair};
pub use stats::PairStatsCollector;
pub use trainer::{TrainingConfig, VocabTrainer};
