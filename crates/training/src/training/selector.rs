//! Best-pair selection.

use molvoc_core::FrequencyTable;

/// The winning pair of one selection scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPair {
    /// Space-joined pair key
    pub key: String,
    /// Frequency measured this round
    pub count: u64,
}

/// Pick the most frequent pair from a statistics table.
///
/// Returns None for an empty table. Ties break to the lexicographically
/// smallest pair key. The reference picked whichever maximal entry its hash
/// buckets surfaced first; that order carries no meaning, so this
/// implementation substitutes the explicit lexicographic rule to keep
/// output independent of the hash function.
pub fn select_best(stats: &FrequencyTable) -> Option<BestPair> {
    let mut best: Option<(&str, u64)> = None;

    for (key, count) in stats.iter() {
        best = match best {
            None => Some((key, count)),
            Some((best_key, best_count)) => {
                if count > best_count || (count == best_count && key < best_key) {
                    Some((key, count))
                } else {
                    Some((best_key, best_count))
                }
            }
        };
    }

    best.map(|(key, count)| BestPair {
        key: key.to_string(),
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let stats = FrequencyTable::new().unwrap();
        assert_eq!(select_best(&stats), None);
    }

    #[test]
    fn test_picks_maximum() {
        let mut stats = FrequencyTable::with_capacity(16).unwrap();
        stats.set_count("[C] [N]", 3).unwrap();
        stats.set_count("[C] [C]", 7).unwrap();
        stats.set_count("[N] [O]", 5).unwrap();

        let best = select_best(&stats).unwrap();
        assert_eq!(best.key, "[C] [C]");
        assert_eq!(best.count, 7);
    }

    #[test]
    fn test_tie_breaks_lexicographically() {
        let mut stats = FrequencyTable::with_capacity(16).unwrap();
        stats.set_count("[N] [O]", 4).unwrap();
        stats.set_count("[C] [N]", 4).unwrap();
        stats.set_count("[O] [C]", 4).unwrap();

        let best = select_best(&stats).unwrap();
        assert_eq!(best.key, "[C] [N]");
    }

    #[test]
    fn test_tie_break_ignores_insertion_order() {
        let mut forward = FrequencyTable::with_capacity(16).unwrap();
        forward.set_count("[A] [B]", 2).unwrap();
        forward.set_count("[A] [A]", 2).unwrap();

        let mut backward = FrequencyTable::with_capacity(16).unwrap();
        backward.set_count("[A] [A]", 2).unwrap();
        backward.set_count("[A] [B]", 2).unwrap();

        assert_eq!(select_best(&forward), select_best(&backward));
        assert_eq!(select_best(&forward).unwrap().key, "[A] [A]");
    }
}
