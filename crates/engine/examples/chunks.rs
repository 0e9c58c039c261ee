use anyhow::Result;
use char_diff::{new_text, old_text, semantic_cleanup, CharDiff};

fn main() -> Result<()> {
    let old = "the quick brown fox\njumps over the lazy dog\n";
    let new = "the quick brown cat\njumps over the lazy dog\nand runs away\n";

    println!("Raw chunks:");
    let chunks = CharDiff::diff(old, new);
    for chunk in &chunks {
        println!("  {} {:?}", chunk.kind, chunk.text);
    }

    println!("\nAfter semantic cleanup:");
    let cleaned = semantic_cleanup(chunks);
    for chunk in &cleaned {
        println!("  {} {:?}", chunk.kind, chunk.text);
    }

    // Both documents fall straight back out of the chunk stream
    println!("\nReconstructed old == input: {}", old_text(&cleaned) == old);
    println!("Reconstructed new == input: {}", new_text(&cleaned) == new);

    Ok(())
}
