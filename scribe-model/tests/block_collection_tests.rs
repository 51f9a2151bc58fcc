use pretty_assertions::assert_eq;
use scribe_model::{BlockCollection, ContentBlock, DocumentBlock};

fn collection(keys: &[&str]) -> BlockCollection<ContentBlock> {
    BlockCollection::from_blocks(
        keys.iter()
            .map(|key| ContentBlock::unstyled(*key, format!("text of {key}"))),
    )
}

// ── Construction & order ─────────────────────────────────────────

#[test]
fn preserves_input_order() {
    let blocks = collection(&["a", "b", "c"]);
    let keys: Vec<&str> = blocks.keys().collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn len_and_is_empty() {
    assert_eq!(collection(&[]).len(), 0);
    assert!(collection(&[]).is_empty());
    assert_eq!(collection(&["a", "b"]).len(), 2);
    assert!(!collection(&["a"]).is_empty());
}

#[test]
fn duplicate_key_keeps_position_takes_last_value() {
    let blocks = BlockCollection::from_blocks([
        ContentBlock::unstyled("a", "first"),
        ContentBlock::unstyled("b", "middle"),
        ContentBlock::unstyled("a", "second"),
    ]);
    assert_eq!(blocks.len(), 2);
    let keys: Vec<&str> = blocks.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(blocks.get("a").unwrap().text(), "second");
}

#[test]
fn collects_from_iterator() {
    let blocks: BlockCollection<ContentBlock> =
        (0..3).map(|i| ContentBlock::unstyled(format!("k{i}"), "x")).collect();
    assert_eq!(blocks.len(), 3);
}

// ── Lookup ───────────────────────────────────────────────────────

#[test]
fn get_by_key() {
    let blocks = collection(&["a", "b"]);
    assert_eq!(blocks.get("b").unwrap().text(), "text of b");
    assert!(blocks.get("missing").is_none());
}

#[test]
fn contains_key() {
    let blocks = collection(&["a"]);
    assert!(blocks.contains_key("a"));
    assert!(!blocks.contains_key("b"));
}

// ── Neighbors ────────────────────────────────────────────────────

#[test]
fn key_before_and_after_interior() {
    let blocks = collection(&["a", "b", "c"]);
    assert_eq!(blocks.key_before("b"), Some("a"));
    assert_eq!(blocks.key_after("b"), Some("c"));
}

#[test]
fn key_before_first_is_none() {
    let blocks = collection(&["a", "b"]);
    assert_eq!(blocks.key_before("a"), None);
}

#[test]
fn key_after_last_is_none() {
    let blocks = collection(&["a", "b"]);
    assert_eq!(blocks.key_after("b"), None);
}

#[test]
fn neighbor_of_unknown_key_is_none() {
    let blocks = collection(&["a", "b"]);
    assert_eq!(blocks.key_before("zzz"), None);
    assert_eq!(blocks.key_after("zzz"), None);
}

#[test]
fn neighbor_lookups_roundtrip_at_interior_positions() {
    let blocks = collection(&["a", "b", "c"]);
    assert_eq!(blocks.key_after(blocks.key_before("b").unwrap()), Some("b"));
    assert_eq!(blocks.key_before(blocks.key_after("b").unwrap()), Some("b"));
}

#[test]
fn block_before_and_after_resolve_blocks() {
    let blocks = collection(&["a", "b", "c"]);
    assert_eq!(blocks.block_before("b").unwrap().key(), "a");
    assert_eq!(blocks.block_after("b").unwrap().key(), "c");
    assert!(blocks.block_before("a").is_none());
    assert!(blocks.block_after("c").is_none());
}

// ── Ends & iteration ─────────────────────────────────────────────

#[test]
fn first_and_last() {
    let blocks = collection(&["a", "b", "c"]);
    assert_eq!(blocks.first().unwrap().key(), "a");
    assert_eq!(blocks.last().unwrap().key(), "c");
}

#[test]
fn first_and_last_of_empty_are_none() {
    let blocks = collection(&[]);
    assert!(blocks.first().is_none());
    assert!(blocks.last().is_none());
}

#[test]
fn iterates_in_document_order_and_reverse() {
    let blocks = collection(&["a", "b", "c"]);
    let forward: Vec<&str> = blocks.iter().map(DocumentBlock::key).collect();
    assert_eq!(forward, vec!["a", "b", "c"]);
    let backward: Vec<&str> = blocks.iter().rev().map(DocumentBlock::key).collect();
    assert_eq!(backward, vec!["c", "b", "a"]);
}

#[test]
fn to_vec_materializes_in_order() {
    let blocks = collection(&["a", "b"]);
    let materialized = blocks.to_vec();
    assert_eq!(materialized.len(), 2);
    assert_eq!(materialized[0].key(), "a");
    assert_eq!(materialized[1].key(), "b");
}

#[test]
fn to_vec_is_a_snapshot_copy() {
    let blocks = collection(&["a"]);
    let mut materialized = blocks.to_vec();
    materialized.clear();
    assert_eq!(blocks.len(), 1);
}

// ── Value semantics ──────────────────────────────────────────────

#[test]
fn clones_compare_equal() {
    let blocks = collection(&["a", "b"]);
    assert_eq!(blocks.clone(), blocks);
}

#[test]
fn collections_with_different_order_are_not_equal() {
    assert_ne!(collection(&["a", "b"]), collection(&["b", "a"]));
}

#[test]
fn serde_roundtrip_preserves_order() {
    let blocks = collection(&["c", "a", "b"]);
    let json = serde_json::to_string(&blocks).unwrap();
    let parsed: BlockCollection<ContentBlock> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, blocks);
    let keys: Vec<&str> = parsed.keys().collect();
    assert_eq!(keys, vec!["c", "a", "b"]);
}

#[test]
fn serializes_as_a_plain_sequence() {
    let blocks = collection(&["a"]);
    let json = serde_json::to_value(&blocks).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array().unwrap().len(), 1);
}
