use char_diff::{ChunkKind, DiffChunk};

use crate::marker::RangeMarker;

/// Row/column position during a chunk walk, 1-indexed like editor cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    row: usize,
    col: usize,
}

/// One side of a pairwise comparison: its document index, the cursor walking
/// it, and the markers collected for it so far
#[derive(Debug)]
struct Side {
    document: usize,
    cursor: Cursor,
    markers: Vec<RangeMarker>,
}

impl Side {
    fn new(document: usize) -> Self {
        Self {
            document,
            cursor: Cursor { row: 1, col: 1 },
            markers: Vec::new(),
        }
    }
}

/// Markers emitted for the two sides of one pairwise comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairMarkers {
    /// Markers on the lower-indexed (source) document
    pub source: Vec<RangeMarker>,
    /// Markers on the higher-indexed (target) document
    pub target: Vec<RangeMarker>,
}

/// Walk one ordered chunk sequence for the pair `(source, target)` and emit
/// highlight markers for both sides.
///
/// Pure function of its inputs: the cursors live only for the duration of
/// the walk, and rows/columns never move backwards. Chunks with empty text
/// are engine artifacts and are skipped without advancing either cursor.
pub fn walk_chunks(
    chunks: &[DiffChunk],
    source: usize,
    target: usize,
    line_segments: bool,
) -> PairMarkers {
    let mut left = Side::new(source);
    let mut right = Side::new(target);

    for chunk in chunks {
        if chunk.is_empty() {
            continue;
        }
        let line_breaks = chunk.text.matches('\n').count();
        let last_line_len = last_line_len(&chunk.text);

        match chunk.kind {
            ChunkKind::Equal => {
                // An equality spanning a break lands both cursors at the
                // start of its final line
                if line_breaks > 0 {
                    left.cursor.col = 1;
                    right.cursor.col = 1;
                }
                left.cursor.row += line_breaks;
                right.cursor.row += line_breaks;
                left.cursor.col += last_line_len;
                right.cursor.col += last_line_len;
            }
            ChunkKind::Delete => {
                highlight_edit(&chunk.text, line_breaks, last_line_len, line_segments, &mut left, &mut right)
            }
            ChunkKind::Insert => {
                highlight_edit(&chunk.text, line_breaks, last_line_len, line_segments, &mut right, &mut left)
            }
        }
    }

    PairMarkers {
        source: left.markers,
        target: right.markers,
    }
}

/// Apply one DELETE or INSERT chunk. `edited` owns the text; `opposite` only
/// ever receives a zero-height alignment anchor.
fn highlight_edit(
    text: &str,
    mut line_breaks: usize,
    last_line_len: usize,
    line_segments: bool,
    edited: &mut Side,
    opposite: &mut Side,
) {
    // A leading newline is absorbed into pushing the cursor down, not into
    // the highlighted span. The column only resets when the edit still spans
    // into a further line.
    if text.starts_with('\n') {
        edited.cursor.row += 1;
        line_breaks -= 1;
        if line_breaks > 0 {
            edited.cursor.col = 1;
        }
    }

    let single_line = line_breaks == 0;
    if single_line {
        // The edit has no row of its own on the other side; hold the
        // alignment with an anchor at the opposite cursor's row
        opposite
            .markers
            .push(RangeMarker::anchor(opposite.document, opposite.cursor.row - 1));
    }

    // A trailing newline must not mark the row after the edit
    let mut marked_rows = line_breaks as isize;
    if text.ends_with('\n') {
        marked_rows -= 1;
    }

    let start_row = edited.cursor.row - 1;
    let end_row = (edited.cursor.row as isize + marked_rows) as usize;
    edited
        .markers
        .push(RangeMarker::line(edited.document, start_row, end_row));

    // Sub-line detail when the edit starts mid-line or stays on one line.
    // Deleting a bare newline collapses to the anchor alone.
    if line_segments
        && (edited.cursor.col > 1 || single_line)
        && !(single_line && last_line_len == 0)
    {
        let start_col = edited.cursor.col - 1;
        let end_col = if single_line {
            start_col + last_line_len
        } else {
            final_marked_line_len(text)
        };
        edited.markers.push(RangeMarker::segment(
            edited.document,
            start_row,
            end_row,
            start_col,
            end_col,
        ));
    }

    edited.cursor.row += line_breaks;
    edited.cursor.col += last_line_len;
}

/// Character length of the text after its final line break, or of the whole
/// text when it has none
fn last_line_len(text: &str) -> usize {
    match text.rfind('\n') {
        Some(idx) => text[idx + 1..].chars().count(),
        None => text.chars().count(),
    }
}

/// Length of the last row the edit actually marks: a trailing newline shifts
/// it back one line
fn final_marked_line_len(text: &str) -> usize {
    last_line_len(text.strip_suffix('\n').unwrap_or(text))
}
