use char_diff::{new_text, old_text, ChunkKind, DiffChunk};

#[test]
fn test_raw_tag_round_trip() {
    // The raw -1/0/1 tags are the diff-match-patch convention
    for kind in [ChunkKind::Delete, ChunkKind::Equal, ChunkKind::Insert] {
        assert_eq!(ChunkKind::try_from(kind.raw_tag()).unwrap(), kind);
    }
}

#[test]
fn test_unknown_tag_is_an_error() {
    // Anything outside {-1, 0, 1} is a contract violation by the engine
    assert!(ChunkKind::try_from(2).is_err());
    assert!(ChunkKind::try_from(-2).is_err());
    assert!(ChunkKind::try_from(i8::MAX).is_err());
}

#[test]
fn test_kind_display() {
    assert_eq!(ChunkKind::Equal.to_string(), "Equal");
    assert_eq!(ChunkKind::Delete.to_string(), "Delete");
    assert_eq!(ChunkKind::Insert.to_string(), "Insert");
}

#[test]
fn test_empty_chunk() {
    assert!(DiffChunk::new(ChunkKind::Equal, "").is_empty());
    assert!(!DiffChunk::new(ChunkKind::Equal, "x").is_empty());
}

#[test]
fn test_reconstruction_helpers() {
    let chunks = vec![
        DiffChunk::new(ChunkKind::Equal, "foo\n"),
        DiffChunk::new(ChunkKind::Delete, "bar"),
        DiffChunk::new(ChunkKind::Insert, "baz"),
        DiffChunk::new(ChunkKind::Equal, "\n"),
    ];

    assert_eq!(old_text(&chunks), "foo\nbar\n");
    assert_eq!(new_text(&chunks), "foo\nbaz\n");
}
