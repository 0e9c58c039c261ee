use crate::chunk::{ChunkKind, DiffChunk};

/// Canonicalize a chunk stream and fold away trivial equalities.
///
/// Empty chunks are dropped, runs of edits are coalesced with deletions
/// ordered before insertions, and an equality no longer than the edit runs on
/// both sides of it is absorbed into those edits. Reconstruction of either
/// document from the result is unchanged.
pub fn semantic_cleanup(chunks: Vec<DiffChunk>) -> Vec<DiffChunk> {
    let mut chunks = coalesce(chunks);
    while let Some(idx) = trivial_equality(&chunks) {
        let text = chunks[idx].text.clone();
        chunks.splice(
            idx..idx + 1,
            [
                DiffChunk::new(ChunkKind::Delete, text.clone()),
                DiffChunk::new(ChunkKind::Insert, text),
            ],
        );
        chunks = coalesce(chunks);
    }
    chunks
}

/// Merge adjacent chunks of the same kind and drop empty ones. Within one
/// edit run, all deleted text ends up before all inserted text.
fn coalesce(chunks: Vec<DiffChunk>) -> Vec<DiffChunk> {
    let mut out: Vec<DiffChunk> = Vec::with_capacity(chunks.len());
    let mut deleted = String::new();
    let mut inserted = String::new();

    for chunk in chunks {
        if chunk.text.is_empty() {
            continue;
        }
        match chunk.kind {
            ChunkKind::Delete => deleted.push_str(&chunk.text),
            ChunkKind::Insert => inserted.push_str(&chunk.text),
            ChunkKind::Equal => {
                flush_edits(&mut out, &mut deleted, &mut inserted);
                match out.last_mut() {
                    Some(last) if last.kind == ChunkKind::Equal => {
                        last.text.push_str(&chunk.text)
                    }
                    _ => out.push(chunk),
                }
            }
        }
    }
    flush_edits(&mut out, &mut deleted, &mut inserted);
    out
}

fn flush_edits(out: &mut Vec<DiffChunk>, deleted: &mut String, inserted: &mut String) {
    if !deleted.is_empty() {
        out.push(DiffChunk::new(ChunkKind::Delete, std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        out.push(DiffChunk::new(ChunkKind::Insert, std::mem::take(inserted)));
    }
}

/// Find an equality that is no longer than the edit runs on both of its
/// sides. Leading and trailing equalities never qualify.
fn trivial_equality(chunks: &[DiffChunk]) -> Option<usize> {
    for idx in 1..chunks.len().saturating_sub(1) {
        if chunks[idx].kind != ChunkKind::Equal {
            continue;
        }
        let len = chunks[idx].text.chars().count();
        let (deleted_before, inserted_before) = edit_run(chunks[..idx].iter().rev());
        let (deleted_after, inserted_after) = edit_run(chunks[idx + 1..].iter());
        if deleted_before + inserted_before == 0 || deleted_after + inserted_after == 0 {
            continue;
        }
        if len <= deleted_before.max(inserted_before) && len <= deleted_after.max(inserted_after)
        {
            return Some(idx);
        }
    }
    None
}

/// Deleted and inserted char counts of the edit run adjacent to an equality
fn edit_run<'a>(chunks: impl Iterator<Item = &'a DiffChunk>) -> (usize, usize) {
    let (mut deleted, mut inserted) = (0, 0);
    for chunk in chunks {
        match chunk.kind {
            ChunkKind::Delete => deleted += chunk.text.chars().count(),
            ChunkKind::Insert => inserted += chunk.text.chars().count(),
            ChunkKind::Equal => break,
        }
    }
    (deleted, inserted)
}
