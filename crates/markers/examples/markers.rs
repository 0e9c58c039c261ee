use anyhow::Result;
use pane_markers::{CompareOptions, MarkerKind, MultiDiff};

fn main() -> Result<()> {
    let left = "the quick brown fox\njumps over\nthe lazy dog\n";
    let right = "the quick red fox\njumps over\nthe lazy cat\n";

    let options = CompareOptions {
        line_segments: true,
        ..Default::default()
    };
    let diff = MultiDiff::new(&[left, right], &options)?;

    for set in diff.marker_sets() {
        println!("Document {}:", set.document());
        for marker in set.markers() {
            match marker.kind {
                MarkerKind::Line => println!(
                    "  line         rows {}..{}",
                    marker.start_row, marker.end_row
                ),
                MarkerKind::LineSegment { start_col, end_col } => println!(
                    "  line-segment rows {}..{} cols {}..{}",
                    marker.start_row, marker.end_row, start_col, end_col
                ),
            }
        }
    }

    println!("\nHas differences: {}", diff.has_differences());

    Ok(())
}
