use pane_markers::{MarkerSet, RangeMarker};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn merged(markers: Vec<RangeMarker>) -> Vec<RangeMarker> {
    MarkerSet::from_pairwise(0, None, markers).markers().to_vec()
}

#[test]
fn test_overlapping_line_markers_merge() {
    let out = merged(vec![
        RangeMarker::line(0, 0, 2),
        RangeMarker::line(0, 1, 4),
    ]);
    assert_eq!(out, vec![RangeMarker::line(0, 0, 4)]);
}

#[test]
fn test_disjoint_line_markers_stay_separate() {
    let out = merged(vec![
        RangeMarker::line(0, 0, 2),
        RangeMarker::line(0, 5, 7),
    ]);
    assert_eq!(
        out,
        vec![RangeMarker::line(0, 0, 2), RangeMarker::line(0, 5, 7)]
    );
}

#[test]
fn test_exact_duplicates_are_dropped() {
    let out = merged(vec![
        RangeMarker::line(0, 1, 2),
        RangeMarker::line(0, 1, 2),
    ]);
    assert_eq!(out, vec![RangeMarker::line(0, 1, 2)]);
}

#[test]
fn test_anchor_duplicates_are_dropped() {
    // Zero-height anchors overlap nothing, so the duplicate rule is what
    // keeps repeated anchors from piling up
    let out = merged(vec![RangeMarker::anchor(0, 3), RangeMarker::anchor(0, 3)]);
    assert_eq!(out, vec![RangeMarker::anchor(0, 3)]);
}

#[test]
fn test_anchor_survives_inside_a_line_marker() {
    // An anchor has no extent, so it neither merges into nor disturbs a
    // line marker spanning the same rows
    let out = merged(vec![RangeMarker::line(0, 1, 3), RangeMarker::anchor(0, 2)]);
    assert_eq!(
        out,
        vec![RangeMarker::line(0, 1, 3), RangeMarker::anchor(0, 2)]
    );
}

#[test]
fn test_segments_do_not_merge_into_line_markers() {
    // Sub-line detail must survive alongside the whole-line highlight
    let out = merged(vec![
        RangeMarker::line(0, 1, 2),
        RangeMarker::segment(0, 1, 2, 0, 3),
    ]);
    assert_eq!(
        out,
        vec![
            RangeMarker::line(0, 1, 2),
            RangeMarker::segment(0, 1, 2, 0, 3),
        ]
    );
}

#[test]
fn test_segment_merge_requires_column_intersection() {
    // Same rows, disjoint columns: both survive
    let out = merged(vec![
        RangeMarker::segment(0, 1, 2, 0, 3),
        RangeMarker::segment(0, 1, 2, 5, 8),
    ]);
    assert_eq!(out.len(), 2);

    // Same rows, intersecting columns: one union
    let out = merged(vec![
        RangeMarker::segment(0, 1, 2, 0, 3),
        RangeMarker::segment(0, 1, 2, 2, 5),
    ]);
    assert_eq!(out, vec![RangeMarker::segment(0, 1, 2, 0, 5)]);
}

#[test]
fn test_absorbing_cascades_through_bridged_markers() {
    // The third marker bridges the first two; all three collapse to one
    let out = merged(vec![
        RangeMarker::line(0, 0, 2),
        RangeMarker::line(0, 5, 7),
        RangeMarker::line(0, 1, 6),
    ]);
    assert_eq!(out, vec![RangeMarker::line(0, 0, 7)]);
}

fn marker_strategy() -> impl Strategy<Value = RangeMarker> {
    prop_oneof![
        (0usize..12, 0usize..6).prop_map(|(start, len)| RangeMarker::line(0, start, start + len)),
        (0usize..12, 1usize..4, 0usize..10, 0usize..6).prop_map(
            |(row, height, col, width)| RangeMarker::segment(0, row, row + height, col, col + width)
        ),
    ]
}

proptest! {
    #[test]
    fn merger_is_idempotent(markers in prop::collection::vec(marker_strategy(), 0..24)) {
        let once = MarkerSet::from_pairwise(0, None, markers);
        let twice = MarkerSet::from_pairwise(0, None, once.markers().to_vec());
        prop_assert_eq!(once.markers(), twice.markers());
    }

    #[test]
    fn merged_markers_never_overlap_each_other(
        markers in prop::collection::vec(marker_strategy(), 0..24),
    ) {
        let set = MarkerSet::from_pairwise(0, None, markers);
        let out = set.markers();
        for (i, a) in out.iter().enumerate() {
            for b in out.iter().skip(i + 1) {
                // Line markers may not share any covered row with each other
                if a.kind == pane_markers::MarkerKind::Line
                    && b.kind == pane_markers::MarkerKind::Line
                {
                    for row in a.start_row..a.end_row {
                        prop_assert!(!(row >= b.start_row && row < b.end_row));
                    }
                }
            }
        }
    }
}
