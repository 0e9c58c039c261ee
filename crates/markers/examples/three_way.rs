use anyhow::Result;
use pane_markers::{CompareOptions, MultiDiff};

fn main() -> Result<()> {
    // Three revisions of the same snippet; every pair is compared
    let base = "fn main() {\n    println!(\"hello\");\n}\n";
    let ours = "fn main() {\n    println!(\"hello, world\");\n}\n";
    let theirs = "fn main() {\n    eprintln!(\"hello\");\n}\n";

    let options = CompareOptions {
        scroll_sync: true,
        labels: vec!["base".into(), "ours".into(), "theirs".into()],
        ..Default::default()
    };
    let diff = MultiDiff::new(&[base, ours, theirs], &options)?;

    for set in diff.marker_sets() {
        let label = set.label().unwrap_or("?");
        println!("{} ({} markers):", label, set.len());
        for marker in set.markers() {
            println!("  rows {}..{}", marker.start_row, marker.end_row);
        }
    }

    println!("\n{} alignment tables computed", diff.alignments().len());

    Ok(())
}
