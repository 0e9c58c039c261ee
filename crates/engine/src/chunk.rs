use anyhow::{bail, Error};
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifies one contiguous run of diffed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChunkKind {
    /// The run exists in both documents
    #[display(fmt = "Equal")]
    Equal,

    /// The run exists only in the old (lower-indexed) document
    #[display(fmt = "Delete")]
    Delete,

    /// The run exists only in the new (higher-indexed) document
    #[display(fmt = "Insert")]
    Insert,
}

impl ChunkKind {
    /// The raw integer tag used by diff-match-patch style engines
    pub fn raw_tag(self) -> i8 {
        match self {
            ChunkKind::Delete => -1,
            ChunkKind::Equal => 0,
            ChunkKind::Insert => 1,
        }
    }
}

impl TryFrom<i8> for ChunkKind {
    type Error = Error;

    /// Convert a raw engine tag. Any value outside {-1, 0, 1} is a contract
    /// violation by the engine and aborts the comparison.
    fn try_from(tag: i8) -> Result<Self, Self::Error> {
        match tag {
            -1 => Ok(ChunkKind::Delete),
            0 => Ok(ChunkKind::Equal),
            1 => Ok(ChunkKind::Insert),
            other => bail!("unrecognized diff chunk tag: {}", other),
        }
    }
}

/// One contiguous run of equal, deleted, or inserted text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffChunk {
    /// How this run relates the two documents
    pub kind: ChunkKind,

    /// The text of the run
    pub text: String,
}

impl DiffChunk {
    /// Create a new chunk
    pub fn new(kind: ChunkKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Engines may emit chunks with no text; they carry no information
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Reconstruct the old document from a chunk sequence (DELETE + EQUAL text)
pub fn old_text(chunks: &[DiffChunk]) -> String {
    chunks
        .iter()
        .filter(|c| c.kind != ChunkKind::Insert)
        .map(|c| c.text.as_str())
        .collect()
}

/// Reconstruct the new document from a chunk sequence (INSERT + EQUAL text)
pub fn new_text(chunks: &[DiffChunk]) -> String {
    chunks
        .iter()
        .filter(|c| c.kind != ChunkKind::Delete)
        .map(|c| c.text.as_str())
        .collect()
}
