//! Artifact format knowledge: markers, special tokens, file naming.

use std::path::{Path, PathBuf};

/// Line separating the merge list from the vocabulary in the plain artifact.
pub const VOCAB_MARKER: &str = "---VOCABULARY---";

/// Reserved vocabulary entries, always serialized first with indices 0-4.
pub const SPECIAL_TOKENS: [&str; 5] = ["<s>", "<pad>", "</s>", "<unk>", "<mask>"];

/// Check whether a token string is one of the reserved special tokens.
pub fn is_special_token(token: &str) -> bool {
    SPECIAL_TOKENS.contains(&token)
}

/// Plain artifact file name for a training run, e.g. `vocab_200.txt`.
pub fn plain_artifact_name(rounds: usize) -> String {
    format!("vocab_{}.txt", rounds)
}

/// JSON index map file name for a training run, e.g. `vocab_200.json`.
pub fn index_artifact_name(rounds: usize) -> String {
    format!("vocab_{}.json", rounds)
}

/// JSON frequency map file name, e.g. `vocab_200_freq.json`.
pub fn freq_artifact_name(rounds: usize) -> String {
    format!("vocab_{}_freq.json", rounds)
}

/// Derive the frequency sidecar path for an index map path:
/// `dir/vocab_200.json` -> `dir/vocab_200_freq.json`.
pub fn freq_sidecar_path(index_path: &Path) -> PathBuf {
    let name = index_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = name.strip_suffix(".json").unwrap_or(&name);
    index_path.with_file_name(format!("{}_freq.json", stem))
}
