use anyhow::Result;
use pane_markers::{CompareOptions, MultiDiff};

fn main() -> Result<()> {
    // The right pane is missing one line and has an extra one at the end
    let left = "intro\nsetup\nteardown\noutro\n";
    let right = "intro\nteardown\noutro\nappendix\n";

    let options = CompareOptions {
        scroll_sync: true,
        ..Default::default()
    };
    let diff = MultiDiff::new(&[left, right], &options)?;

    for (&(source, target), table) in diff.alignments() {
        println!("Alignment {} -> {}:", source, target);
        for (row, target_row) in table.rows().iter().enumerate() {
            println!("  source row {:2} sits beside target row {:2}", row, target_row);
        }
    }

    Ok(())
}
