use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::merge::merge_markers;

/// Distinguishes whole-row highlights from column-scoped ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MarkerKind {
    /// Covers whole rows with no column scoping
    #[display(fmt = "line")]
    Line,

    /// Additionally scopes columns across the row span: `start_col` applies
    /// on the first covered row, `end_col` (exclusive) on the last
    #[display(fmt = "line-segment")]
    LineSegment { start_col: usize, end_col: usize },
}

/// A highlighted row or row+column range attributed to one document.
///
/// Rows and columns are 0-indexed and half-open. A zero-height `Line` marker
/// (`start_row == end_row`) is an alignment anchor: it holds a position for
/// the row aligner without highlighting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeMarker {
    /// Index of the document this marker highlights
    pub document: usize,

    /// Whole rows, or a column-scoped segment
    pub kind: MarkerKind,

    /// First covered row
    pub start_row: usize,

    /// One past the last covered row
    pub end_row: usize,
}

impl RangeMarker {
    /// A whole-row marker covering `[start_row, end_row)`
    pub fn line(document: usize, start_row: usize, end_row: usize) -> Self {
        Self {
            document,
            kind: MarkerKind::Line,
            start_row,
            end_row,
        }
    }

    /// A column-scoped marker over the same row span
    pub fn segment(
        document: usize,
        start_row: usize,
        end_row: usize,
        start_col: usize,
        end_col: usize,
    ) -> Self {
        Self {
            document,
            kind: MarkerKind::LineSegment { start_col, end_col },
            start_row,
            end_row,
        }
    }

    /// A zero-height placeholder at `row`, emitted opposite a single-line
    /// edit to keep the two sides row-aligned
    pub fn anchor(document: usize, row: usize) -> Self {
        Self::line(document, row, row)
    }

    pub fn is_anchor(&self) -> bool {
        self.kind == MarkerKind::Line && self.start_row == self.end_row
    }

    /// Whether a whole-row marker covers the given row. Segments only refine
    /// rows some line marker already covers, and anchors cover nothing, so
    /// neither participates.
    pub fn covers_row(&self, row: usize) -> bool {
        self.kind == MarkerKind::Line && row >= self.start_row && row < self.end_row
    }

    fn rows_intersect(&self, other: &Self) -> bool {
        self.start_row.max(other.start_row) < self.end_row.min(other.end_row)
    }

    /// Markers merge only within the same kind; segments additionally need
    /// their column ranges to intersect
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (MarkerKind::Line, MarkerKind::Line) => self.rows_intersect(other),
            (
                MarkerKind::LineSegment {
                    start_col: a_start,
                    end_col: a_end,
                },
                MarkerKind::LineSegment {
                    start_col: b_start,
                    end_col: b_end,
                },
            ) => self.rows_intersect(other) && a_start.max(b_start) < a_end.min(b_end),
            _ => false,
        }
    }

    /// Grow this marker to the union of both bounds
    pub(crate) fn absorb(&mut self, other: &Self) {
        self.start_row = self.start_row.min(other.start_row);
        self.end_row = self.end_row.max(other.end_row);
        if let (
            MarkerKind::LineSegment { start_col, end_col },
            MarkerKind::LineSegment {
                start_col: other_start,
                end_col: other_end,
            },
        ) = (&mut self.kind, other.kind)
        {
            *start_col = (*start_col).min(other_start);
            *end_col = (*end_col).max(other_end);
        }
    }
}

/// The merged, deduplicated markers of one document.
///
/// Rebuilt from scratch on every comparison pass, never patched in place.
/// Marker order is the insertion order of first-seen markers, not sorted.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerSet {
    document: usize,
    label: Option<String>,
    markers: Vec<RangeMarker>,
}

impl MarkerSet {
    /// Build the set from the concatenated marker lists of every pairwise
    /// comparison this document participated in
    pub fn from_pairwise(
        document: usize,
        label: Option<String>,
        markers: Vec<RangeMarker>,
    ) -> Self {
        Self {
            document,
            label,
            markers: merge_markers(markers),
        }
    }

    pub fn document(&self) -> usize {
        self.document
    }

    /// The caller-supplied tag for this document, opaque to the pipeline
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn markers(&self) -> &[RangeMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Whether some whole-row marker covers the row; the aligner's predicate
    pub fn row_is_marked(&self, row: usize) -> bool {
        self.markers.iter().any(|m| m.covers_row(row))
    }
}
