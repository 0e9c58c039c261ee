use std::collections::BTreeMap;

use anyhow::Result;
use log::{debug, trace};
use rayon::prelude::*;

use char_diff::{semantic_cleanup, CharDiff, DiffChunk, DiffEngine};

use crate::align::{align_rows, AlignmentTable};
use crate::document::Document;
use crate::marker::{MarkerSet, RangeMarker};
use crate::walker::{walk_chunks, PairMarkers};

/// Options recognized by a comparison pass
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Emit sub-line, column-scoped markers in addition to whole-line markers
    pub line_segments: bool,

    /// Produce a row-alignment table for every ordered document pair
    pub scroll_sync: bool,

    /// Opaque per-document tags threaded through to the marker sets, used by
    /// callers to pick a highlight style per document
    pub labels: Vec<String>,
}

/// A full comparison pass over N documents.
///
/// Diffs every unordered document pair, walks each chunk sequence into
/// per-side markers, merges them into one `MarkerSet` per document, and
/// (when requested) aligns rows for every ordered pair. Rebuilt from scratch
/// whenever any document changes; nothing is updated incrementally.
#[derive(Debug)]
pub struct MultiDiff {
    documents: Vec<Document>,
    marker_sets: Vec<MarkerSet>,
    alignments: BTreeMap<(usize, usize), AlignmentTable>,
}

impl MultiDiff {
    /// Compare documents with the default character-level engine
    pub fn new(texts: &[&str], options: &CompareOptions) -> Result<Self> {
        Self::with_engine(texts, options, &CharDiff)
    }

    /// Compare documents with a caller-supplied diff engine
    pub fn with_engine<E>(texts: &[&str], options: &CompareOptions, engine: &E) -> Result<Self>
    where
        E: DiffEngine + Sync,
    {
        let documents: Vec<Document> = texts.iter().map(|text| Document::new(text)).collect();

        // Upper-triangular pair relation: every unordered pair exactly once
        let pairs: Vec<(usize, usize)> = (0..documents.len())
            .flat_map(|i| (i + 1..documents.len()).map(move |j| (i, j)))
            .collect();
        debug!(
            "comparing {} documents across {} pairs",
            documents.len(),
            pairs.len()
        );

        // Pairwise comparisons are independent; fan them out across workers
        let walked: Vec<((usize, usize), PairMarkers)> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let chunks = pair_chunks(&documents[i], &documents[j], engine)?;
                let markers = walk_chunks(&chunks, i, j, options.line_segments);
                Ok(((i, j), markers))
            })
            .collect::<Result<_>>()?;
        let pair_markers: BTreeMap<(usize, usize), PairMarkers> = walked.into_iter().collect();

        // Merge barrier: a document's set needs every pair that touches it
        let marker_sets: Vec<MarkerSet> = (0..documents.len())
            .map(|doc| {
                let mut contributed: Vec<RangeMarker> = Vec::new();
                for (&(i, j), markers) in &pair_markers {
                    if i == doc {
                        contributed.extend_from_slice(&markers.source);
                    } else if j == doc {
                        contributed.extend_from_slice(&markers.target);
                    }
                }
                trace!("document {}: {} raw markers", doc, contributed.len());
                MarkerSet::from_pairwise(doc, options.labels.get(doc).cloned(), contributed)
            })
            .collect();

        let mut alignments = BTreeMap::new();
        if options.scroll_sync {
            for source in 0..documents.len() {
                for target in 0..documents.len() {
                    if source == target {
                        continue;
                    }
                    let table = align_rows(
                        &marker_sets[source],
                        documents[source].line_count(),
                        &marker_sets[target],
                    );
                    alignments.insert((source, target), table);
                }
            }
        }

        Ok(Self {
            documents,
            marker_sets,
            alignments,
        })
    }

    /// The documents, in input order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// The merged marker set of one document
    pub fn markers(&self, document: usize) -> Option<&MarkerSet> {
        self.marker_sets.get(document)
    }

    /// All merged marker sets, indexed by document
    pub fn marker_sets(&self) -> &[MarkerSet] {
        &self.marker_sets
    }

    /// The row-alignment table for an ordered pair, present when scroll sync
    /// was requested
    pub fn alignment(&self, source: usize, target: usize) -> Option<&AlignmentTable> {
        self.alignments.get(&(source, target))
    }

    /// Every alignment table, keyed by ordered `(source, target)` pair
    pub fn alignments(&self) -> &BTreeMap<(usize, usize), AlignmentTable> {
        &self.alignments
    }

    /// Whether any document has a highlight; callers use this as the cue for
    /// a "no differences" display
    pub fn has_differences(&self) -> bool {
        self.marker_sets.iter().any(|set| !set.is_empty())
    }
}

/// Chunks for one document pair. Two empty documents deterministically yield
/// no chunks without consulting the engine.
fn pair_chunks<E: DiffEngine>(old: &Document, new: &Document, engine: &E) -> Result<Vec<DiffChunk>> {
    if old.is_empty() && new.is_empty() {
        return Ok(Vec::new());
    }
    let chunks = engine.chunks(&old.to_text(), &new.to_text())?;
    Ok(semantic_cleanup(chunks))
}
