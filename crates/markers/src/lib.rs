// Marker and row-alignment pipeline for multi-pane diff views
// This crate turns character-level diff chunks into per-document highlight
// ranges and cross-document row alignment tables

mod align;
mod compare;
mod document;
mod marker;
mod merge;
mod walker;

pub use align::{align_rows, AlignmentTable};
pub use compare::{CompareOptions, MultiDiff};
pub use document::Document;
pub use marker::{MarkerKind, MarkerSet, RangeMarker};
pub use walker::{walk_chunks, PairMarkers};
