//! Save functionality for trained vocabularies.
//!
//! Two artifact forms are produced: a plain text file carrying the merge
//! list and the vocabulary counts, and a JSON pair mapping tokens to model
//! indices and to corpus frequencies.

use super::format::{is_special_token, SPECIAL_TOKENS, VOCAB_MARKER};
use molvoc_core::{FrequencyTable, MergeRule, Result, VocabError};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Vocabulary saver - borrows a trained vocabulary and its merge list.
pub struct VocabSaver<'a> {
    /// Token -> count vocabulary
    vocab: &'a FrequencyTable,
    /// Merge rules in discovery order
    merges: &'a [MergeRule],
}

impl<'a> VocabSaver<'a> {
    /// Create a saver over a trained vocabulary and merge list.
    pub fn new(vocab: &'a FrequencyTable, merges: &'a [MergeRule]) -> Self {
        Self { vocab, merges }
    }

    /// Write the plain artifact.
    ///
    /// Line 1 is the merge count, followed by one `"A B"` line per rule in
    /// discovery order, the marker line, then one `token<TAB>count` line per
    /// vocabulary entry (entry order is not meaningful).
    pub fn save_plain(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| VocabError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        self.write_plain(&mut writer)
            .map_err(|e| VocabError::io(path, e))
    }

    fn write_plain(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.merges.len())?;
        for rule in self.merges {
            writeln!(writer, "{}", rule.pair_key())?;
        }
        writeln!(writer, "{}", VOCAB_MARKER)?;
        for (token, count) in self.vocab.iter() {
            writeln!(writer, "{}\t{}", token, count)?;
        }
        writer.flush()
    }

    /// Write the JSON index map and frequency map.
    ///
    /// The index map starts with the five special tokens at indices 0-4,
    /// then every remaining vocabulary token at strictly increasing indices
    /// in enumeration order. The frequency map covers the same non-special
    /// tokens, mapping each to its vocabulary count.
    pub fn save_json(&self, index_path: &Path, freq_path: &Path) -> Result<()> {
        let mut index_map = Map::new();
        let mut freq_map = Map::new();

        let mut index: u64 = 0;
        for special in SPECIAL_TOKENS {
            index_map.insert(special.to_string(), Value::from(index));
            index += 1;
        }

        for (token, count) in self.vocab.iter() {
            if is_special_token(token) {
                continue;
            }
            index_map.insert(token.to_string(), Value::from(index));
            freq_map.insert(token.to_string(), Value::from(count));
            index += 1;
        }

        write_json(index_path, &Value::Object(index_map))?;
        write_json(freq_path, &Value::Object(freq_map))?;
        Ok(())
    }
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let file = File::create(path).map_err(|e| VocabError::io(path, e))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .map_err(|e| VocabError::io(path, std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (FrequencyTable, Vec<MergeRule>) {
        let mut vocab = FrequencyTable::with_capacity(32).unwrap();
        vocab.set_count("[C]", 4).unwrap();
        vocab.set_count("[N]", 1).unwrap();
        vocab.set_count("[C][C]", 2).unwrap();
        let merges = vec![MergeRule::new("[C]", "[C]")];
        (vocab, merges)
    }

    #[test]
    fn test_plain_layout() {
        let (vocab, merges) = sample();
        let saver = VocabSaver::new(&vocab, &merges);

        let mut buffer = Vec::new();
        saver.write_plain(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "1");
        assert_eq!(lines[1], "[C] [C]");
        assert_eq!(lines[2], VOCAB_MARKER);
        assert_eq!(lines.len(), 6);
        assert!(lines[3..].contains(&"[C]\t4"));
        assert!(lines[3..].contains(&"[C][C]\t2"));
    }

    #[test]
    fn test_json_specials_lead() {
        let (vocab, merges) = sample();
        let saver = VocabSaver::new(&vocab, &merges);

        let dir = std::env::temp_dir().join("molvoc_test_save_json");
        std::fs::create_dir_all(&dir).unwrap();
        let index_path = dir.join("vocab_1.json");
        let freq_path = dir.join("vocab_1_freq.json");
        saver.save_json(&index_path, &freq_path).unwrap();

        let index: Value =
            serde_json::from_str(&std::fs::read_to_string(&index_path).unwrap()).unwrap();
        let object = index.as_object().unwrap();

        let keys: Vec<&String> = object.keys().collect();
        assert_eq!(&keys[..5], &["<s>", "<pad>", "</s>", "<unk>", "<mask>"]);
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(object[*key].as_u64(), Some(i as u64));
        }

        let freq: Value =
            serde_json::from_str(&std::fs::read_to_string(&freq_path).unwrap()).unwrap();
        let freq = freq.as_object().unwrap();
        assert_eq!(freq.len(), 3);
        assert_eq!(freq["[C]"].as_u64(), Some(4));
        assert_eq!(freq["[C][C]"].as_u64(), Some(2));
        assert!(!freq.contains_key("<pad>"));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_json_does_not_duplicate_specials() {
        let mut vocab = FrequencyTable::with_capacity(16).unwrap();
        vocab.set_count("<unk>", 12).unwrap();
        vocab.set_count("[O]", 3).unwrap();
        let merges = Vec::new();
        let saver = VocabSaver::new(&vocab, &merges);

        let dir = std::env::temp_dir().join("molvoc_test_save_specials");
        std::fs::create_dir_all(&dir).unwrap();
        let index_path = dir.join("vocab_0.json");
        let freq_path = dir.join("vocab_0_freq.json");
        saver.save_json(&index_path, &freq_path).unwrap();

        let index: Value =
            serde_json::from_str(&std::fs::read_to_string(&index_path).unwrap()).unwrap();
        let object = index.as_object().unwrap();
        // <unk> appears once, in the special prefix.
        assert_eq!(object.len(), 6);
        assert_eq!(object["<unk>"].as_u64(), Some(3));
        assert_eq!(object["[O]"].as_u64(), Some(5));

        std::fs::remove_dir_all(dir).ok();
    }
}
