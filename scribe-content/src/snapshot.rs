//! The document snapshot: one immutable version of the full document
//! state.

use crate::{EntityInstance, EntityRegistry};
use scribe_model::{
    BlockCollection, BlockNode, DocumentBlock, ImportContext, SelectionState, blocks_from_text,
};
use scribe_types::{EntityMutability, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Zero-width space, inserted by some input-method workarounds as an
/// invisible placeholder.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// One immutable version of the full document state: ordered blocks,
/// the entity registry, and the selections before and after the edit
/// that produced it.
///
/// Snapshots are persistent values. Every operation returns a new
/// snapshot sharing unchanged substructure with the receiver; old
/// snapshots stay valid and independently observable, so an undo
/// stack is just a stack of snapshot references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "B: Serialize",
    deserialize = "B: Deserialize<'de> + DocumentBlock"
))]
pub struct DocumentSnapshot<B = BlockNode> {
    entity_registry: EntityRegistry,
    blocks: BlockCollection<B>,
    selection_before: SelectionState,
    selection_after: SelectionState,
}

/// A block array plus optional registry, as produced by an external
/// converter (HTML or markdown import and the like).
#[derive(Debug, Clone)]
pub struct ParsedContent<B = BlockNode> {
    pub blocks: Vec<B>,
    pub entity_registry: Option<EntityRegistry>,
}

impl<B> Default for ParsedContent<B> {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            entity_registry: None,
        }
    }
}

impl<B: DocumentBlock> DocumentSnapshot<B> {
    /// Builds a snapshot from an ordered block sequence, preserving
    /// input order.
    ///
    /// Starts a fresh empty registry when none is supplied. Both
    /// selections collapse at the first block's key; with no blocks at
    /// all, they fall back to the default unbound selection.
    #[must_use]
    pub fn from_block_array<I>(blocks: I, entity_registry: Option<EntityRegistry>) -> Self
    where
        I: IntoIterator<Item = B>,
    {
        let blocks = BlockCollection::from_blocks(blocks);
        let selection = match blocks.first() {
            Some(first) => SelectionState::collapsed_at(first.key()),
            None => SelectionState::default(),
        };
        Self {
            entity_registry: entity_registry.unwrap_or_default(),
            blocks,
            selection_before: selection.clone(),
            selection_after: selection,
        }
    }

    /// Builds a snapshot from converter output, adopting its registry
    /// when present.
    #[must_use]
    pub fn from_parsed(parsed: ParsedContent<B>) -> Self {
        Self::from_block_array(parsed.blocks, parsed.entity_registry)
    }

    /// The ordered block collection.
    #[must_use]
    pub fn blocks(&self) -> &BlockCollection<B> {
        &self.blocks
    }

    /// Looks up a block by key.
    #[must_use]
    pub fn block_for_key(&self, key: &str) -> Option<&B> {
        self.blocks.get(key)
    }

    /// Key of the block before `key` in document order, `None` at the
    /// first block.
    #[must_use]
    pub fn key_before(&self, key: &str) -> Option<&str> {
        self.blocks.key_before(key)
    }

    /// Key of the block after `key` in document order, `None` at the
    /// last block.
    #[must_use]
    pub fn key_after(&self, key: &str) -> Option<&str> {
        self.blocks.key_after(key)
    }

    /// Block before `key` in document order.
    #[must_use]
    pub fn block_before(&self, key: &str) -> Option<&B> {
        self.blocks.block_before(key)
    }

    /// Block after `key` in document order.
    #[must_use]
    pub fn block_after(&self, key: &str) -> Option<&B> {
        self.blocks.block_after(key)
    }

    /// First block in document order.
    #[must_use]
    pub fn first_block(&self) -> Option<&B> {
        self.blocks.first()
    }

    /// Last block in document order.
    #[must_use]
    pub fn last_block(&self) -> Option<&B> {
        self.blocks.last()
    }

    /// Snapshot copy of the blocks in document order; does not track
    /// snapshots derived later.
    #[must_use]
    pub fn blocks_as_vec(&self) -> Vec<B>
    where
        B: Clone,
    {
        self.blocks.to_vec()
    }

    /// Every block's text joined by `"\n"`, in document order.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.plain_text_with_delimiter("\n")
    }

    /// Every block's text joined by `delimiter`, in document order.
    ///
    /// A pure text projection: never inspects entities or styles.
    #[must_use]
    pub fn plain_text_with_delimiter(&self, delimiter: &str) -> String {
        self.blocks
            .iter()
            .map(DocumentBlock::text)
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Whether the document holds any real text.
    ///
    /// A single block containing only zero-width spaces still reports
    /// `false`: input-method workarounds insert invisible placeholder
    /// characters that must not count as content.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.blocks.len() > 1
            || self
                .blocks
                .first()
                .is_some_and(|block| block.text().chars().any(|c| c != ZERO_WIDTH_SPACE))
    }

    /// Selection before the edit that produced this snapshot.
    #[must_use]
    pub fn selection_before(&self) -> &SelectionState {
        &self.selection_before
    }

    /// Selection after the edit that produced this snapshot.
    #[must_use]
    pub fn selection_after(&self) -> &SelectionState {
        &self.selection_after
    }

    // Entity operations return a new snapshot with an updated
    // registry; none touches the block collection.

    /// The entity registry.
    #[must_use]
    pub fn entity_registry(&self) -> &EntityRegistry {
        &self.entity_registry
    }

    /// Allocates a new entity in the registry.
    #[must_use]
    pub fn create_entity(
        &self,
        entity_type: impl Into<String>,
        mutability: EntityMutability,
        data: Option<Map<String, Value>>,
    ) -> Self {
        self.with_registry(self.entity_registry.create(entity_type, mutability, data))
    }

    /// Adds a pre-built entity instance to the registry.
    #[must_use]
    pub fn add_entity(&self, instance: EntityInstance) -> Self {
        self.with_registry(self.entity_registry.add(instance))
    }

    /// Shallow-merges `partial` over the entity's data payload; fails
    /// on an unknown key.
    pub fn merge_entity_data(&self, key: &str, partial: &Map<String, Value>) -> Result<Self> {
        Ok(self.with_registry(self.entity_registry.merge_data(key, partial)?))
    }

    /// Replaces the entity's data payload wholesale; fails on an
    /// unknown key.
    pub fn replace_entity_data(&self, key: &str, data: Map<String, Value>) -> Result<Self> {
        Ok(self.with_registry(self.entity_registry.replace_data(key, data)?))
    }

    /// Looks up an entity, failing loudly on an unknown key.
    pub fn get_entity(&self, key: &str) -> Result<&EntityInstance> {
        self.entity_registry.get_entity(key)
    }

    /// The registry's most recently inserted key.
    #[must_use]
    pub fn last_created_entity_key(&self) -> Option<&str> {
        self.entity_registry.last_created_entity_key()
    }

    /// New snapshot with `entity_registry` swapped; blocks and
    /// selections shared with the receiver.
    fn with_registry(&self, entity_registry: EntityRegistry) -> Self {
        Self {
            entity_registry,
            blocks: self.blocks.clone(),
            selection_before: self.selection_before.clone(),
            selection_after: self.selection_after.clone(),
        }
    }
}

impl DocumentSnapshot<BlockNode> {
    /// Builds a snapshot from raw text with the default import
    /// capabilities, splitting on any newline sequence.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, None, &ImportContext::default())
    }

    /// Builds a snapshot from raw text.
    ///
    /// A `delimiter` of `None` splits on any newline sequence. Each
    /// piece is sanitized and becomes one unstyled block, in input
    /// order; empty text yields a single empty block.
    #[must_use]
    pub fn from_text_with(text: &str, delimiter: Option<&str>, ctx: &ImportContext) -> Self {
        let blocks = blocks_from_text(text, delimiter, ctx);
        debug!(blocks = blocks.len(), "imported plain text");
        Self::from_block_array(blocks, None)
    }
}
