//! Molvoc-tokenizer - Chemical-notation tokenization and artifact I/O
//!
//! This crate turns raw SMILES/SELFIES lines into token sequences under one
//! of two fixed grammars, and reads/writes the trained-vocabulary artifacts
//! (plain text and JSON index/frequency maps).
//!
//! # Example
//!
//! ```rust
//! use molvoc_tokenizer::{Grammar, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(Grammar::Selfies);
//! let tokens = tokenizer.tokenize("[C][C][N]");
//! assert_eq!(tokens.len(), 3);
//! ```

// Re-export core types
pub use molvoc_core::{Result, VocabError};

// Grammar selection and scanning
pub mod grammar;
pub use grammar::Grammar;

pub mod scanner;
pub use scanner::Tokenizer;

// IO/Serialization
pub mod io;
pub use io::{VocabLoader, VocabSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
