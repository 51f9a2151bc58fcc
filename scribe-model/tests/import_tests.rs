use scribe_model::{BlockNode, DocumentBlock, ImportContext, TREE_BLOCKS, blocks_from_text};
use scribe_types::{KeyGenerator, StaticFlags};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic key generator for assertions on specific keys.
struct SeqKeys(AtomicUsize);

impl SeqKeys {
    fn new() -> Self {
        Self(AtomicUsize::new(0))
    }
}

impl KeyGenerator for SeqKeys {
    fn next_key(&self) -> String {
        format!("k{}", self.0.fetch_add(1, Ordering::Relaxed))
    }
}

fn seq_ctx() -> ImportContext {
    ImportContext {
        keys: Box::new(SeqKeys::new()),
        ..ImportContext::default()
    }
}

fn texts(blocks: &[BlockNode]) -> Vec<&str> {
    blocks.iter().map(DocumentBlock::text).collect()
}

// ── Splitting ────────────────────────────────────────────────────

#[test]
fn splits_on_newlines_keeping_empty_lines() {
    let blocks = blocks_from_text("line1\nline2\n\nline3", None, &seq_ctx());
    assert_eq!(texts(&blocks), vec!["line1", "line2", "", "line3"]);
}

#[test]
fn treats_crlf_and_cr_as_single_breaks() {
    let blocks = blocks_from_text("a\r\nb\rc", None, &seq_ctx());
    assert_eq!(texts(&blocks), vec!["a", "b", "c"]);
}

#[test]
fn empty_text_yields_one_empty_block() {
    let blocks = blocks_from_text("", None, &seq_ctx());
    assert_eq!(texts(&blocks), vec![""]);
}

#[test]
fn trailing_newline_yields_trailing_empty_block() {
    let blocks = blocks_from_text("a\n", None, &seq_ctx());
    assert_eq!(texts(&blocks), vec!["a", ""]);
}

#[test]
fn explicit_delimiter_splits_literally() {
    let blocks = blocks_from_text("a|b|c", Some("|"), &seq_ctx());
    assert_eq!(texts(&blocks), vec!["a", "b", "c"]);
}

// ── Block synthesis ──────────────────────────────────────────────

#[test]
fn each_block_gets_an_independent_key() {
    let blocks = blocks_from_text("a\nb\nc", None, &ImportContext::default());
    let keys: HashSet<&str> = blocks.iter().map(DocumentBlock::key).collect();
    assert_eq!(keys.len(), 3);
}

#[test]
fn char_runs_match_text_lengths() {
    let blocks = blocks_from_text("line1\n\nxy", None, &seq_ctx());
    assert_eq!(blocks[0].chars().len(), 5);
    assert_eq!(blocks[1].chars().len(), 0);
    assert_eq!(blocks[2].chars().len(), 2);
}

#[test]
fn blocks_are_unstyled() {
    let blocks = blocks_from_text("a\nb", None, &seq_ctx());
    assert!(blocks.iter().all(|b| b.block_type() == "unstyled"));
}

#[test]
fn injected_key_generator_is_used_in_order() {
    let blocks = blocks_from_text("a\nb", None, &seq_ctx());
    assert_eq!(blocks[0].key(), "k0");
    assert_eq!(blocks[1].key(), "k1");
}

#[test]
fn sanitizer_is_applied_to_each_piece() {
    // A stray carriage return inside an explicit-delimiter split must
    // not survive into block text.
    let blocks = blocks_from_text("a\rb|c", Some("|"), &seq_ctx());
    assert_eq!(texts(&blocks), vec!["ab", "c"]);
}

// ── Representation choice ────────────────────────────────────────

#[test]
fn default_flags_build_flat_blocks() {
    let blocks = blocks_from_text("a\nb", None, &seq_ctx());
    assert!(blocks.iter().all(|b| b.as_flat().is_some()));
}

#[test]
fn tree_flag_builds_tree_blocks() {
    let ctx = ImportContext {
        flags: Box::new(StaticFlags::new().with_flag(TREE_BLOCKS, true)),
        ..seq_ctx()
    };
    let blocks = blocks_from_text("a\nb", None, &ctx);
    assert!(blocks.iter().all(|b| b.as_tree().is_some()));
}
