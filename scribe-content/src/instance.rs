//! Entity instances: out-of-band annotations referenced from text.

use scribe_types::EntityMutability;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An annotation record (hyperlink, mention, embed, ...): a type tag,
/// a mutability classification, and an arbitrary string-keyed data
/// payload.
///
/// Instances are immutable values. The payload helpers return new
/// instances and back the registry's copy-on-write data operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInstance {
    #[serde(rename = "type")]
    entity_type: String,
    mutability: EntityMutability,
    #[serde(default)]
    data: Map<String, Value>,
}

impl EntityInstance {
    /// Creates an instance. `None` data means an empty payload.
    #[must_use]
    pub fn new(
        entity_type: impl Into<String>,
        mutability: EntityMutability,
        data: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            mutability,
            data: data.unwrap_or_default(),
        }
    }

    /// The entity's type tag (`"LINK"`, `"MENTION"`, ...).
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// How the entity's text span may be edited.
    #[must_use]
    pub fn mutability(&self) -> EntityMutability {
        self.mutability
    }

    /// The data payload.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Returns a copy with `partial` shallow-merged over the payload:
    /// new keys added, existing keys overwritten, unrelated keys
    /// preserved.
    #[must_use]
    pub fn with_merged_data(&self, partial: &Map<String, Value>) -> Self {
        let mut next = self.clone();
        for (key, value) in partial {
            next.data.insert(key.clone(), value.clone());
        }
        next
    }

    /// Returns a copy with the payload replaced wholesale.
    #[must_use]
    pub fn with_data(&self, data: Map<String, Value>) -> Self {
        let mut next = self.clone();
        next.data = data;
        next
    }
}
