//! Token grammar selection.
//!
//! Two fixed grammars are supported. Alternative order inside each pattern
//! is significant: the scanner takes the first alternative that matches at
//! the current position, so reordering changes how ambiguous prefixes
//! tokenize (e.g. `Br` before the single-letter atoms).

use molvoc_core::{Result, VocabError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// SMILES atom-level pattern.
///
/// Alternatives, in priority order:
/// - Bracketed atoms: [C@@H], [nH], [O-], ...
/// - Two-letter halogens: Br, Cl (before the single-letter atoms)
/// - Single-letter atoms: N, O, S, P, F, I and aromatic b, c, n, o, s, p
/// - Branches, bonds, stereo marks and punctuation
/// - Ring closures: %XX before single digits
const SMILES_PATTERN: &str = r"\[[^\]]+\]|Br?|Cl?|N|O|S|P|F|I|b|c|n|o|s|p|\(|\)|\.|=|#|-|\+|\\|/|:|~|@|\?|>|\*|\$|%[0-9]{2}|[0-9]";

/// SELFIES bracket-only pattern: a maximal `[...]` group or a literal dot.
const SELFIES_PATTERN: &str = r"\[[^\]]+\]|\.";

/// Token grammar for one corpus format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grammar {
    /// Atom-level SMILES tokenization
    Smiles,
    /// Bracket-group SELFIES tokenization
    Selfies,
}

impl Grammar {
    /// The regex alternation for this grammar.
    pub fn pattern(&self) -> &'static str {
        match self {
            Grammar::Smiles => SMILES_PATTERN,
            Grammar::Selfies => SELFIES_PATTERN,
        }
    }

    /// The compiled pattern, built once per grammar.
    pub(crate) fn compiled(&self) -> &'static Regex {
        static SMILES_RE: OnceLock<Regex> = OnceLock::new();
        static SELFIES_RE: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            Grammar::Smiles => &SMILES_RE,
            Grammar::Selfies => &SELFIES_RE,
        };
        cell.get_or_init(|| Regex::new(self.pattern()).expect("Invalid grammar pattern"))
    }
}

impl FromStr for Grammar {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "smiles" => Ok(Grammar::Smiles),
            "selfies" => Ok(Grammar::Selfies),
            other => Err(VocabError::Config(format!(
                "unknown input format '{}', must be 'smiles' or 'selfies'",
                other
            ))),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grammar::Smiles => write!(f, "smiles"),
            Grammar::Selfies => write!(f, "selfies"),
        }
    }
}
