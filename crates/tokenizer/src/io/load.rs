//! Load functionality for saved vocabularies.
//!
//! Both artifact forms reconstruct an ordered merge-rule list and a
//! token -> count vocabulary. A structural failure aborts the whole load;
//! no partial vocabulary is returned.

use super::format::{freq_sidecar_path, VOCAB_MARKER};
use molvoc_core::{FrequencyTable, MergeRule, Result, VocabError};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Initial bucket count for loaded vocabularies.
const LOAD_CAPACITY: usize = 100;

/// Vocabulary loader - reads either artifact form.
pub struct VocabLoader;

impl VocabLoader {
    /// Load the plain artifact.
    ///
    /// Expects the merge count header, exactly that many `"A B"` lines, the
    /// marker line, then `token<TAB>count` entries.
    pub fn load_plain(path: &Path) -> Result<(FrequencyTable, Vec<MergeRule>)> {
        let file = File::open(path).map_err(|e| VocabError::io(path, e))?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let header = lines
            .next()
            .ok_or_else(|| VocabError::MalformedArtifact("empty artifact".into()))?
            .map_err(|e| VocabError::io(path, e))?;
        let merge_count: usize = header.trim().parse().map_err(|_| {
            VocabError::MalformedArtifact(format!("invalid merge count header {:?}", header))
        })?;

        let mut merges = Vec::with_capacity(merge_count);
        for i in 0..merge_count {
            let line = lines
                .next()
                .ok_or_else(|| {
                    VocabError::MalformedArtifact(format!(
                        "merge list truncated after {} of {} rules",
                        i, merge_count
                    ))
                })?
                .map_err(|e| VocabError::io(path, e))?;
            let rule = MergeRule::from_pair_key(&line).ok_or_else(|| {
                VocabError::MalformedArtifact(format!(
                    "merge line {} lacks a pair separator: {:?}",
                    i + 1,
                    line
                ))
            })?;
            merges.push(rule);
        }

        let mut found_marker = false;
        for line in lines.by_ref() {
            let line = line.map_err(|e| VocabError::io(path, e))?;
            if line == VOCAB_MARKER {
                found_marker = true;
                break;
            }
        }
        if !found_marker {
            return Err(VocabError::MalformedArtifact(format!(
                "missing {} marker line",
                VOCAB_MARKER
            )));
        }

        let mut vocab = FrequencyTable::with_capacity(LOAD_CAPACITY)?;
        for line in lines {
            let line = line.map_err(|e| VocabError::io(path, e))?;
            let (token, count) = line.split_once('\t').ok_or_else(|| {
                VocabError::MalformedArtifact(format!("vocabulary line lacks a tab: {:?}", line))
            })?;
            let count: u64 = count.trim().parse().map_err(|_| {
                VocabError::MalformedArtifact(format!("invalid count for token {:?}", token))
            })?;
            vocab.set_count(token, count)?;
        }

        Ok((vocab, merges))
    }

    /// Load the JSON index map, overlaying its frequency sidecar if present.
    ///
    /// Numeric-valued entries become vocabulary tokens whose placeholder
    /// count is the stored number; string values containing a space are
    /// merge rules in encounter order; other string values are tokens with
    /// placeholder count 1. The `_freq.json` sidecar, when present,
    /// overrides the placeholder counts for the tokens it names.
    pub fn load_json(path: &Path) -> Result<(FrequencyTable, Vec<MergeRule>)> {
        let object = read_json_object(path)?;

        let mut vocab = FrequencyTable::with_capacity(LOAD_CAPACITY)?;
        let mut merges = Vec::new();

        for (key, value) in &object {
            match value {
                Value::Number(n) => {
                    let count = n.as_u64().ok_or_else(|| {
                        VocabError::MalformedArtifact(format!(
                            "non-integer index for token {:?}",
                            key
                        ))
                    })?;
                    vocab.set_count(key, count)?;
                }
                Value::String(s) => match MergeRule::from_pair_key(s) {
                    Some(rule) => merges.push(rule),
                    None => vocab.set_count(key, 1)?,
                },
                _ => {
                    return Err(VocabError::MalformedArtifact(format!(
                        "unsupported value for entry {:?}",
                        key
                    )))
                }
            }
        }

        let sidecar = freq_sidecar_path(path);
        if sidecar.exists() {
            let freq = read_json_object(&sidecar)?;
            for (token, value) in &freq {
                let count = value.as_u64().ok_or_else(|| {
                    VocabError::MalformedArtifact(format!(
                        "non-integer frequency for token {:?}",
                        token
                    ))
                })?;
                // Frequencies override placeholders for known tokens only.
                if vocab.find(token).is_some() {
                    vocab.set_count(token, count)?;
                }
            }
        }

        Ok((vocab, merges))
    }
}

fn read_json_object(path: &Path) -> Result<serde_json::Map<String, Value>> {
    let file = File::open(path).map_err(|e| VocabError::io(path, e))?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        VocabError::MalformedArtifact(format!("invalid JSON in {}: {}", path.display(), e))
    })?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(VocabError::MalformedArtifact(format!(
            "top-level JSON value in {} is not an object",
            path.display()
        ))),
    }
}
