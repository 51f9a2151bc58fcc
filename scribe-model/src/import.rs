//! Plain-text import: splitting raw text into unstyled blocks.

use crate::{BlockNode, ContentBlock, TreeBlock};
use scribe_types::{
    CarriageReturnSanitizer, FeatureFlags, KeyGenerator, RandomKeyGenerator, StaticFlags,
    TextSanitizer,
};
use std::fmt;

/// Feature flag selecting the tree-aware block representation for
/// imported text.
pub const TREE_BLOCKS: &str = "tree_blocks";

/// Capabilities consumed while turning raw text into blocks.
///
/// Injectable so tests control key generation, sanitization, and the
/// representation choice deterministically.
pub struct ImportContext {
    pub keys: Box<dyn KeyGenerator>,
    pub sanitizer: Box<dyn TextSanitizer>,
    pub flags: Box<dyn FeatureFlags>,
}

impl Default for ImportContext {
    fn default() -> Self {
        Self {
            keys: Box::new(RandomKeyGenerator),
            sanitizer: Box::new(CarriageReturnSanitizer),
            flags: Box::new(StaticFlags::new()),
        }
    }
}

impl fmt::Debug for ImportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ImportContext")
    }
}

/// Splits `text` and synthesizes one unstyled block per piece, in
/// input order.
///
/// A `delimiter` of `None` splits on any newline sequence (`\r\n`,
/// `\r`, or `\n`, each counting as a single break). Empty text yields
/// a single empty block, never zero blocks. Each piece is sanitized
/// before block construction, and every block gets a fresh key and a
/// character run matching its text length. The block representation is
/// chosen once per call from the [`TREE_BLOCKS`] flag.
#[must_use]
pub fn blocks_from_text(text: &str, delimiter: Option<&str>, ctx: &ImportContext) -> Vec<BlockNode> {
    let tree = ctx.flags.is_enabled(TREE_BLOCKS);
    let pieces: Vec<String> = match delimiter {
        Some(delimiter) => text.split(delimiter).map(str::to_string).collect(),
        None => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            normalized.split('\n').map(str::to_string).collect()
        }
    };

    pieces
        .into_iter()
        .map(|piece| {
            let text = ctx.sanitizer.sanitize(&piece);
            let key = ctx.keys.next_key();
            if tree {
                BlockNode::Tree(TreeBlock::unstyled(key, text))
            } else {
                BlockNode::Flat(ContentBlock::unstyled(key, text))
            }
        })
        .collect()
}
