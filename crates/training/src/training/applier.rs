//! Merge application.

use molvoc_core::{MergeRule, TokenSequence};

/// Rewrite one sequence by collapsing every occurrence of a chosen pair.
///
/// Single left-to-right pass: when the current token equals the rule's
/// first token and the next equals its second, the concatenation is emitted
/// and the scan advances two positions. Merges never overlap within a pass;
/// a freshly emitted merged token is not re-examined against its successor.
pub fn merge_pair(sequence: &TokenSequence, rule: &MergeRule) -> TokenSequence {
    let n = sequence.len();
    if n < 2 {
        return sequence.clone();
    }

    let mut out = TokenSequence::with_capacity(n);
    let mut i = 0;
    while i < n {
        if i + 1 < n && sequence[i] == rule.first && sequence[i + 1] == rule.second {
            out.push(rule.merged.clone());
            i += 2;
        } else {
            out.push(sequence[i].clone());
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use molvoc_core::Token;

    fn seq(tokens: &[&str]) -> TokenSequence {
        tokens.iter().map(|t| Token::new(t)).collect()
    }

    #[test]
    fn test_merges_every_occurrence() {
        let rule = MergeRule::new("[C]", "[C]");
        let merged = merge_pair(&seq(&["[C]", "[C]", "[N]", "[O]", "[C]", "[C]"]), &rule);
        assert_eq!(merged, seq(&["[C][C]", "[N]", "[O]", "[C][C]"]));
    }

    #[test]
    fn test_merges_do_not_overlap() {
        // Three in a row collapse once; the merged token is not re-examined.
        let rule = MergeRule::new("[C]", "[C]");
        let merged = merge_pair(&seq(&["[C]", "[C]", "[C]"]), &rule);
        assert_eq!(merged, seq(&["[C][C]", "[C]"]));
    }

    #[test]
    fn test_no_occurrence_is_identity() {
        let rule = MergeRule::new("[N]", "[O]");
        let original = seq(&["[C]", "[C]", "[C]"]);
        assert_eq!(merge_pair(&original, &rule), original);
    }

    #[test]
    fn test_never_lengthens() {
        let rule = MergeRule::new("[C]", "[N]");
        for tokens in [
            vec!["[C]", "[N]", "[C]", "[N]"],
            vec!["[N]", "[C]"],
            vec!["[C]"],
            vec![],
        ] {
            let original = seq(&tokens);
            let merged = merge_pair(&original, &rule);
            assert!(merged.len() <= original.len());
        }
    }

    #[test]
    fn test_shrinks_once_per_occurrence() {
        let rule = MergeRule::new("[C]", "[N]");
        let original = seq(&["[C]", "[N]", "[O]", "[C]", "[N]"]);
        let merged = merge_pair(&original, &rule);
        assert_eq!(merged.len(), original.len() - 2);
    }

    #[test]
    fn test_pair_at_sequence_end() {
        let rule = MergeRule::new("[N]", "[O]");
        let merged = merge_pair(&seq(&["[C]", "[N]", "[O]"]), &rule);
        assert_eq!(merged, seq(&["[C]", "[N][O]"]));
    }
}
