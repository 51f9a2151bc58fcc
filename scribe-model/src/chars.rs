//! Per-character styling and entity references.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable metadata for a single character: the set of inline styles
/// applied to it and the key of the entity it references, if any.
///
/// Updates are copy-on-write. Entity keys stored here must resolve in
/// the registry of the snapshot this metadata belongs to; the
/// registry's fail-loud lookup is what catches violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterMetadata {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    styles: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entity: Option<String>,
}

impl CharacterMetadata {
    /// The no-style, no-entity value.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A run of `len` empty records, for unstyled text.
    #[must_use]
    pub fn empty_run(len: usize) -> Vec<Self> {
        vec![Self::default(); len]
    }

    /// Whether `style` is applied to this character.
    #[must_use]
    pub fn has_style(&self, style: &str) -> bool {
        self.styles.contains(style)
    }

    /// Applied styles in sorted order.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(String::as_str)
    }

    /// Key of the referenced entity, if any.
    #[must_use]
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Returns a copy with `style` applied.
    #[must_use]
    pub fn with_style(&self, style: &str) -> Self {
        let mut next = self.clone();
        next.styles.insert(style.to_string());
        next
    }

    /// Returns a copy with `style` removed.
    #[must_use]
    pub fn without_style(&self, style: &str) -> Self {
        let mut next = self.clone();
        next.styles.remove(style);
        next
    }

    /// Returns a copy referencing `entity` (or clearing the reference
    /// with `None`).
    #[must_use]
    pub fn with_entity(&self, entity: Option<String>) -> Self {
        let mut next = self.clone();
        next.entity = entity;
        next
    }
}
