//! Append-mostly, key-addressed store of entity instances.

use crate::EntityInstance;
use scribe_types::{EntityMutability, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Key-addressed store of [`EntityInstance`]s with insertion-order
/// iteration and a monotonically increasing key counter.
///
/// A registry is an immutable value: every operation returns a new
/// registry sharing unchanged entries with the receiver. The counter
/// is carried forward through every derived registry, so keys issued
/// by [`add`](EntityRegistry::add) are unique across the whole chain
/// of derived registries, never reused.
#[derive(Clone, Serialize, Deserialize)]
#[serde(from = "RegistryRepr", into = "RegistryRepr")]
pub struct EntityRegistry {
    instance_count: u64,
    order: Arc<Vec<String>>,
    entities: Arc<HashMap<String, Arc<EntityInstance>>>,
}

impl EntityRegistry {
    /// An empty registry with the counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instance_count: 0,
            order: Arc::new(Vec::new()),
            entities: Arc::new(HashMap::new()),
        }
    }

    /// Number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the registry holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Whether an entity is stored under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entities.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Entities as (key, instance) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityInstance)> {
        self.order
            .iter()
            .map(|key| (key.as_str(), &*self.entities[key]))
    }

    /// The most recently inserted key.
    ///
    /// Insertion order, not numeric order: after
    /// [`add_at_key`](EntityRegistry::add_at_key) this is not
    /// necessarily the numerically largest key.
    #[must_use]
    pub fn last_created_entity_key(&self) -> Option<&str> {
        self.order.last().map(String::as_str)
    }

    /// Looks up `key`, failing loudly when absent.
    ///
    /// An unknown key is a caller defect — a dangling or fabricated
    /// key — never an expected miss. The error names the key.
    pub fn get_entity(&self, key: &str) -> Result<&EntityInstance> {
        self.entities
            .get(key)
            .map(|instance| &**instance)
            .ok_or_else(|| Error::UnknownEntityKey(key.to_string()))
    }

    /// Stores `instance` under the next counter value, stringified.
    ///
    /// The issued key is strictly greater, as an integer, than every
    /// key this registry's ancestor chain has issued before.
    #[must_use]
    pub fn add(&self, instance: EntityInstance) -> Self {
        let count = self.instance_count + 1;
        let key = count.to_string();
        trace!(key = %key, entity_type = %instance.entity_type(), "issued entity key");
        self.inserted(key, instance, count)
    }

    /// Stores `instance` at an explicitly supplied key while still
    /// advancing the counter.
    ///
    /// Escape hatch for loading previously serialized documents, where
    /// keys must be preserved across registries. No collision check is
    /// performed: last write wins, and an overwritten key keeps its
    /// original insertion position.
    #[must_use]
    pub fn add_at_key(&self, key: impl Into<String>, instance: EntityInstance) -> Self {
        self.inserted(key.into(), instance, self.instance_count + 1)
    }

    /// Builds an instance from its parts and [`add`](EntityRegistry::add)s it.
    #[must_use]
    pub fn create(
        &self,
        entity_type: impl Into<String>,
        mutability: EntityMutability,
        data: Option<Map<String, Value>>,
    ) -> Self {
        self.add(EntityInstance::new(entity_type, mutability, data))
    }

    /// Returns a registry with `other`'s entries merged on top of this
    /// one's.
    ///
    /// Key collisions resolve in favor of `other`, keeping the
    /// original insertion position; fresh keys append in `other`'s
    /// order. The counter is retained from `self` unchanged — counters
    /// are NOT reconciled, so a later [`add`](EntityRegistry::add) can
    /// issue a key that collides with one contributed by `other`.
    /// Callers preserving foreign keys are expected to route them
    /// through [`add_at_key`](EntityRegistry::add_at_key) when that
    /// matters.
    #[must_use]
    pub fn merge(&self, other: &EntityRegistry) -> Self {
        debug!(ours = self.len(), theirs = other.len(), "merging entity registries");
        let mut entities = (*self.entities).clone();
        let mut order = (*self.order).clone();
        for key in other.order.iter() {
            let instance = Arc::clone(&other.entities[key]);
            if entities.insert(key.clone(), instance).is_none() {
                order.push(key.clone());
            }
        }
        Self {
            instance_count: self.instance_count,
            order: Arc::new(order),
            entities: Arc::new(entities),
        }
    }

    /// Shallow-merges `partial` over the entity's data payload.
    ///
    /// Fails when `key` is unknown.
    pub fn merge_data(&self, key: &str, partial: &Map<String, Value>) -> Result<Self> {
        let updated = self.get_entity(key)?.with_merged_data(partial);
        Ok(self.replaced(key, updated))
    }

    /// Replaces the entity's data payload wholesale.
    ///
    /// Fails when `key` is unknown.
    pub fn replace_data(&self, key: &str, data: Map<String, Value>) -> Result<Self> {
        let updated = self.get_entity(key)?.with_data(data);
        Ok(self.replaced(key, updated))
    }

    /// New registry with `key` bound to `instance`. Appends to the
    /// insertion order only when the key is fresh.
    fn inserted(&self, key: String, instance: EntityInstance, instance_count: u64) -> Self {
        let mut entities = (*self.entities).clone();
        let mut order = (*self.order).clone();
        if entities.insert(key.clone(), Arc::new(instance)).is_none() {
            order.push(key);
        }
        Self {
            instance_count,
            order: Arc::new(order),
            entities: Arc::new(entities),
        }
    }

    /// New registry with the value under an existing `key` swapped;
    /// counter and order unchanged.
    fn replaced(&self, key: &str, instance: EntityInstance) -> Self {
        let mut entities = (*self.entities).clone();
        entities.insert(key.to_string(), Arc::new(instance));
        Self {
            instance_count: self.instance_count,
            order: Arc::clone(&self.order),
            entities: Arc::new(entities),
        }
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for EntityRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.instance_count == other.instance_count && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRegistry")
            .field("instance_count", &self.instance_count)
            .field("entities", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Wire shape: the counter plus (key, instance) pairs in insertion
/// order. The key → instance map is rebuilt on deserialization.
#[derive(Serialize, Deserialize)]
struct RegistryRepr {
    instance_count: u64,
    entities: Vec<(String, EntityInstance)>,
}

impl From<EntityRegistry> for RegistryRepr {
    fn from(registry: EntityRegistry) -> Self {
        Self {
            instance_count: registry.instance_count,
            entities: registry
                .iter()
                .map(|(key, instance)| (key.to_string(), instance.clone()))
                .collect(),
        }
    }
}

impl From<RegistryRepr> for EntityRegistry {
    fn from(repr: RegistryRepr) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut entities: HashMap<String, Arc<EntityInstance>> = HashMap::new();
        for (key, instance) in repr.entities {
            if entities.insert(key.clone(), Arc::new(instance)).is_none() {
                order.push(key);
            }
        }
        Self {
            instance_count: repr.instance_count,
            order: Arc::new(order),
            entities: Arc::new(entities),
        }
    }
}
