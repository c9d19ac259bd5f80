//! Line scanner.
//!
//! Splits one corpus line into an ordered token sequence under a grammar.
//! Scanning is anchored, leftmost and non-overlapping: at each position the
//! first matching alternative wins. When no alternative matches at the
//! current position, scanning stops and the remaining suffix of the line is
//! silently dropped — a known correctness gap carried over from the
//! reference tokenizer, kept so trained vocabularies stay comparable.

use crate::grammar::Grammar;
use molvoc_core::{Token, TokenSequence};

/// Deterministic tokenizer for one grammar.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    grammar: Grammar,
}

impl Tokenizer {
    /// Create a tokenizer for the given grammar.
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    /// The grammar this tokenizer scans with.
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    /// Tokenize one line (no terminator) into a possibly-empty sequence.
    pub fn tokenize(&self, line: &str) -> TokenSequence {
        let re = self.grammar.compiled();
        let mut tokens = TokenSequence::new();
        let mut pos = 0;

        while pos < line.len() {
            match re.find_at(line, pos) {
                Some(m) if m.start() == pos => {
                    tokens.push(Token::new(m.as_str()));
                    pos = m.end();
                }
                // Nothing matches here; drop the rest of the line.
                _ => break,
            }
        }

        tokens
    }
}
