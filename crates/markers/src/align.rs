use crate::marker::MarkerSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row mapping for one ordered document pair, used to keep two views
/// scrolled in step.
///
/// One entry per source row. The value is the target row the source row sits
/// beside; -1 means the source row precedes the first target row. Tables are
/// directional: `(source, target)` and `(target, source)` are computed
/// independently and may disagree near highlighted regions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlignmentTable {
    rows: Vec<isize>,
}

impl AlignmentTable {
    /// Target row for the given source row
    pub fn target_row(&self, source_row: usize) -> Option<isize> {
        self.rows.get(source_row).copied()
    }

    /// One entry per source row, non-decreasing
    pub fn rows(&self) -> &[isize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Walk the source and target row sequences in step and map every source row
/// to a target row.
///
/// Two-pointer state machine over the "is this row covered by a line marker"
/// flags: rows marked on both sides or neither advance together; a row marked
/// only on the source holds the current target row; a row marked only on the
/// target stalls the source while the target catches up. Column segments and
/// zero-height anchors never mark a row. A zero-line source document yields
/// an empty table.
pub fn align_rows(source: &MarkerSet, source_lines: usize, target: &MarkerSet) -> AlignmentTable {
    let mut rows = Vec::with_capacity(source_lines);
    let mut source_row = 0;
    let mut target_row: isize = -1;

    while source_row < source_lines {
        let marked_on_source = source.row_is_marked(source_row);
        let marked_on_target = target.row_is_marked((target_row + 1) as usize);

        if marked_on_source == marked_on_target {
            target_row += 1;
            rows.push(target_row);
            source_row += 1;
        } else if marked_on_source {
            // No counterpart row on the target yet: hold
            rows.push(target_row);
            source_row += 1;
        } else {
            // Target-only highlight: let the target catch up and look at
            // the same source row again
            target_row += 1;
        }
    }

    AlignmentTable { rows }
}
