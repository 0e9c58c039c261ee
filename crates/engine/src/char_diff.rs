use std::time::Duration;

use anyhow::Result;
use similar::{Algorithm, ChangeTag, TextDiff};

use crate::chunk::{ChunkKind, DiffChunk};

/// A character-level diff engine.
///
/// Implementations must uphold the reconstruction contract: concatenating the
/// DELETE + EQUAL chunk texts in order reproduces `old`, and INSERT + EQUAL
/// reproduces `new`.
pub trait DiffEngine {
    /// Diff two documents into an ordered chunk sequence
    fn chunks(&self, old: &str, new: &str) -> Result<Vec<DiffChunk>>;
}

/// The default engine, backed by the `similar` crate at char granularity
#[derive(Debug, Clone, Copy, Default)]
pub struct CharDiff;

impl CharDiff {
    /// Diff two strings character by character
    pub fn diff(old: &str, new: &str) -> Vec<DiffChunk> {
        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .timeout(Duration::from_secs(5))
            .diff_chars(old, new);

        // The diff walks single-char tokens; regroup them into maximal
        // same-tag runs so downstream consumers see dmp-style chunks.
        let mut chunks: Vec<DiffChunk> = Vec::new();
        for change in diff.iter_all_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => ChunkKind::Equal,
                ChangeTag::Delete => ChunkKind::Delete,
                ChangeTag::Insert => ChunkKind::Insert,
            };
            match chunks.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(change.value()),
                _ => chunks.push(DiffChunk::new(kind, change.value())),
            }
        }
        chunks
    }
}

impl DiffEngine for CharDiff {
    fn chunks(&self, old: &str, new: &str) -> Result<Vec<DiffChunk>> {
        Ok(Self::diff(old, new))
    }
}
