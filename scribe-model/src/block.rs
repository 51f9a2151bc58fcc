//! Block records: the flat and tree-aware representations.

use crate::CharacterMetadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The default block type tag.
pub const UNSTYLED: &str = "unstyled";

/// Read contract any value stored in a [`BlockCollection`] must
/// satisfy.
///
/// [`BlockCollection`]: crate::BlockCollection
pub trait DocumentBlock {
    /// Stable key identifying this block across snapshots.
    fn key(&self) -> &str;

    /// Block type tag (`"unstyled"`, `"header-one"`, ...).
    fn block_type(&self) -> &str;

    /// The block's text content.
    fn text(&self) -> &str;

    /// Per-character metadata, one record per character of
    /// [`text`](DocumentBlock::text).
    fn chars(&self) -> &[CharacterMetadata];

    /// Nesting depth, for list blocks.
    fn depth(&self) -> usize;
}

/// A flat text block: one paragraph-level unit of the document.
///
/// Blocks are immutable values; the document model never edits block
/// internals, only replaces whole blocks within its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    key: String,
    block_type: String,
    #[serde(default)]
    depth: usize,
    text: String,
    chars: Vec<CharacterMetadata>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    data: Map<String, Value>,
}

impl ContentBlock {
    /// Creates a block from its parts.
    ///
    /// `chars` must hold one record per character of `text`.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        block_type: impl Into<String>,
        text: impl Into<String>,
        chars: Vec<CharacterMetadata>,
    ) -> Self {
        let text = text.into();
        debug_assert_eq!(text.chars().count(), chars.len());
        Self {
            key: key.into(),
            block_type: block_type.into(),
            depth: 0,
            text,
            chars,
            data: Map::new(),
        }
    }

    /// An unstyled block with an empty character run matching `text`.
    #[must_use]
    pub fn unstyled(key: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = CharacterMetadata::empty_run(text.chars().count());
        Self::new(key, UNSTYLED, text, chars)
    }

    /// Returns a copy at the given nesting depth.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Returns a copy carrying the given block-level data payload.
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Block-level data payload.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl DocumentBlock for ContentBlock {
    fn key(&self) -> &str {
        &self.key
    }

    fn block_type(&self) -> &str {
        &self.block_type
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn chars(&self) -> &[CharacterMetadata] {
        &self.chars
    }

    fn depth(&self) -> usize {
        self.depth
    }
}

/// A tree-aware block: the flat fields plus parent/children/sibling
/// links, all by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeBlock {
    #[serde(flatten)]
    block: ContentBlock,
    parent: Option<String>,
    children: Vec<String>,
    prev_sibling: Option<String>,
    next_sibling: Option<String>,
}

impl TreeBlock {
    /// Wraps a flat block as an unlinked tree node.
    #[must_use]
    pub fn from_block(block: ContentBlock) -> Self {
        Self {
            block,
            parent: None,
            children: Vec::new(),
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// An unstyled, unlinked tree block.
    #[must_use]
    pub fn unstyled(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self::from_block(ContentBlock::unstyled(key, text))
    }

    /// Key of the parent block, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Keys of the child blocks, in order.
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Key of the previous sibling, if any.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<&str> {
        self.prev_sibling.as_deref()
    }

    /// Key of the next sibling, if any.
    #[must_use]
    pub fn next_sibling(&self) -> Option<&str> {
        self.next_sibling.as_deref()
    }

    /// Returns a copy linked under `parent`.
    #[must_use]
    pub fn with_parent(mut self, parent: Option<String>) -> Self {
        self.parent = parent;
        self
    }

    /// Returns a copy with the given children keys.
    #[must_use]
    pub fn with_children(mut self, children: Vec<String>) -> Self {
        self.children = children;
        self
    }

    /// Returns a copy with the given sibling links.
    #[must_use]
    pub fn with_siblings(mut self, prev: Option<String>, next: Option<String>) -> Self {
        self.prev_sibling = prev;
        self.next_sibling = next;
        self
    }
}

impl DocumentBlock for TreeBlock {
    fn key(&self) -> &str {
        self.block.key()
    }

    fn block_type(&self) -> &str {
        self.block.block_type()
    }

    fn text(&self) -> &str {
        self.block.text()
    }

    fn chars(&self) -> &[CharacterMetadata] {
        self.block.chars()
    }

    fn depth(&self) -> usize {
        self.block.depth()
    }
}

/// A block in either representation.
///
/// Which variant plain-text import builds is decided once per import
/// by the [`TREE_BLOCKS`](crate::TREE_BLOCKS) feature flag.
///
/// Untagged serde: tree blocks are recognized by their link fields, so
/// the variants must stay in tree-first order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockNode {
    /// Tree-aware representation.
    Tree(TreeBlock),
    /// Flat representation.
    Flat(ContentBlock),
}

impl BlockNode {
    /// The flat block, when this is the flat variant.
    #[must_use]
    pub fn as_flat(&self) -> Option<&ContentBlock> {
        match self {
            Self::Flat(block) => Some(block),
            Self::Tree(_) => None,
        }
    }

    /// The tree block, when this is the tree variant.
    #[must_use]
    pub fn as_tree(&self) -> Option<&TreeBlock> {
        match self {
            Self::Tree(block) => Some(block),
            Self::Flat(_) => None,
        }
    }
}

impl DocumentBlock for BlockNode {
    fn key(&self) -> &str {
        match self {
            Self::Tree(block) => block.key(),
            Self::Flat(block) => block.key(),
        }
    }

    fn block_type(&self) -> &str {
        match self {
            Self::Tree(block) => block.block_type(),
            Self::Flat(block) => block.block_type(),
        }
    }

    fn text(&self) -> &str {
        match self {
            Self::Tree(block) => block.text(),
            Self::Flat(block) => block.text(),
        }
    }

    fn chars(&self) -> &[CharacterMetadata] {
        match self {
            Self::Tree(block) => block.chars(),
            Self::Flat(block) => block.chars(),
        }
    }

    fn depth(&self) -> usize {
        match self {
            Self::Tree(block) => block.depth(),
            Self::Flat(block) => block.depth(),
        }
    }
}

impl From<ContentBlock> for BlockNode {
    fn from(block: ContentBlock) -> Self {
        Self::Flat(block)
    }
}

impl From<TreeBlock> for BlockNode {
    fn from(block: TreeBlock) -> Self {
        Self::Tree(block)
    }
}
