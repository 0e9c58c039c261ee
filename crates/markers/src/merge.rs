use crate::marker::RangeMarker;

/// Collapse the concatenated per-pair marker lists of one document into a
/// deduplicated, overlap-free list.
///
/// Left-to-right fold: the first overlapping entry absorbs the incoming
/// marker, an exact duplicate is dropped, anything else appends. Absorbing
/// can bridge an entry into others merged earlier, so the grown entry keeps
/// folding neighbors in until it overlaps nothing; that keeps the whole fold
/// idempotent.
pub(crate) fn merge_markers(incoming: Vec<RangeMarker>) -> Vec<RangeMarker> {
    let mut merged: Vec<RangeMarker> = Vec::new();
    for marker in incoming {
        match merged.iter().position(|m| m.overlaps(&marker)) {
            Some(idx) => {
                merged[idx].absorb(&marker);
                collapse_around(&mut merged, idx);
            }
            None => {
                if !merged.contains(&marker) {
                    merged.push(marker);
                }
            }
        }
    }
    merged
}

fn collapse_around(merged: &mut Vec<RangeMarker>, mut idx: usize) {
    loop {
        let grown = merged[idx];
        let bridged = merged
            .iter()
            .enumerate()
            .find(|(other, m)| *other != idx && m.overlaps(&grown))
            .map(|(other, _)| other);
        match bridged {
            Some(other) => {
                let absorbed = merged.remove(other);
                if other < idx {
                    idx -= 1;
                }
                merged[idx].absorb(&absorbed);
            }
            None => break,
        }
    }
}
