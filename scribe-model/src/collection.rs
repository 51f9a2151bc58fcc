//! Ordered block storage with structural sharing.

use crate::DocumentBlock;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A persistent ordered map from block key to block.
///
/// Iteration order IS the canonical document order; there is no
/// separate sort. The collection is an immutable value: cloning copies
/// two pointers, and every block is shared with the clone. Neighbor
/// lookups resolve through a key → position index in O(1).
pub struct BlockCollection<B> {
    order: Arc<Vec<Arc<B>>>,
    index: Arc<HashMap<String, usize>>,
}

impl<B: DocumentBlock> BlockCollection<B> {
    /// Builds a collection preserving input order.
    ///
    /// A duplicate key replaces the earlier value but keeps its
    /// original position.
    #[must_use]
    pub fn from_blocks<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = B>,
    {
        let mut order: Vec<Arc<B>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for block in blocks {
            match index.get(block.key()) {
                Some(&position) => order[position] = Arc::new(block),
                None => {
                    index.insert(block.key().to_string(), order.len());
                    order.push(Arc::new(block));
                }
            }
        }
        Self {
            order: Arc::new(order),
            index: Arc::new(index),
        }
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up a block by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&B> {
        self.index.get(key).map(|&position| &*self.order[position])
    }

    /// Whether a block with `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Key of the block immediately before `key` in document order.
    ///
    /// `None` when `key` is first, or not present at all.
    #[must_use]
    pub fn key_before(&self, key: &str) -> Option<&str> {
        let position = *self.index.get(key)?;
        let before = position.checked_sub(1)?;
        Some(self.order[before].key())
    }

    /// Key of the block immediately after `key` in document order.
    ///
    /// `None` when `key` is last, or not present at all.
    #[must_use]
    pub fn key_after(&self, key: &str) -> Option<&str> {
        let position = *self.index.get(key)?;
        self.order.get(position + 1).map(|block| block.key())
    }

    /// Block immediately before `key` in document order.
    #[must_use]
    pub fn block_before(&self, key: &str) -> Option<&B> {
        self.key_before(key).and_then(|before| self.get(before))
    }

    /// Block immediately after `key` in document order.
    #[must_use]
    pub fn block_after(&self, key: &str) -> Option<&B> {
        self.key_after(key).and_then(|after| self.get(after))
    }

    /// First block in document order.
    #[must_use]
    pub fn first(&self) -> Option<&B> {
        self.order.first().map(|block| &**block)
    }

    /// Last block in document order.
    #[must_use]
    pub fn last(&self) -> Option<&B> {
        self.order.last().map(|block| &**block)
    }

    /// Blocks in document order. Reversible.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &B> + ExactSizeIterator {
        self.order.iter().map(|block| &**block)
    }

    /// Keys in document order. Reversible.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.order.iter().map(|block| block.key())
    }

    /// Snapshot copy of the blocks in document order.
    ///
    /// The returned vector does not track later collections derived
    /// from this one.
    #[must_use]
    pub fn to_vec(&self) -> Vec<B>
    where
        B: Clone,
    {
        self.order.iter().map(|block| (**block).clone()).collect()
    }
}

impl<B> Clone for BlockCollection<B> {
    fn clone(&self) -> Self {
        Self {
            order: Arc::clone(&self.order),
            index: Arc::clone(&self.index),
        }
    }
}

impl<B: DocumentBlock> Default for BlockCollection<B> {
    fn default() -> Self {
        Self::from_blocks(std::iter::empty())
    }
}

impl<B: DocumentBlock> FromIterator<B> for BlockCollection<B> {
    fn from_iter<I: IntoIterator<Item = B>>(blocks: I) -> Self {
        Self::from_blocks(blocks)
    }
}

impl<B: PartialEq> PartialEq for BlockCollection<B> {
    fn eq(&self, other: &Self) -> bool {
        self.order.len() == other.order.len()
            && self
                .order
                .iter()
                .zip(other.order.iter())
                .all(|(a, b)| **a == **b)
    }
}

impl<B: fmt::Debug> fmt::Debug for BlockCollection<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.order.iter().map(|block| &**block))
            .finish()
    }
}

// Wire shape: an ordered sequence of blocks. The key index is derived
// state and is rebuilt on deserialization.

impl<B: Serialize> Serialize for BlockCollection<B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.order.iter().map(|block| &**block))
    }
}

impl<'de, B> Deserialize<'de> for BlockCollection<B>
where
    B: Deserialize<'de> + DocumentBlock,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let blocks = Vec::<B>::deserialize(deserializer)?;
        Ok(Self::from_blocks(blocks))
    }
}
