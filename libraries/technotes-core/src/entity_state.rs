//! Normalized entity snapshot
//!
//! Mirrors the `{ids, entities}` shape the entity cache keeps for every
//! collection: an ordered id list plus an id-keyed lookup table. The order of
//! `ids` is the input order every projection starts from, so ties in a stable
//! sort resolve to it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Something stored in an [`EntityState`]
pub trait Entity {
    /// Identifier type
    type Id: Clone + Eq + Hash + Ord + Debug + Serialize + DeserializeOwned;

    /// The entity's identifier
    fn id(&self) -> &Self::Id;
}

/// Id-ordered, id-keyed collection of entities
///
/// Every id in `ids` has exactly one entity and every entity is listed once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
pub struct EntityState<T: Entity> {
    ids: Vec<T::Id>,
    entities: HashMap<T::Id, T>,
}

impl<T: Entity> EntityState<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            entities: HashMap::new(),
        }
    }

    /// Build a collection keeping iteration order
    pub fn from_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let mut state = Self::new();
        for entity in entities {
            state.upsert(entity);
        }
        state
    }

    /// Insert an entity, replacing any entity with the same id in place
    pub fn upsert(&mut self, entity: T) {
        let id = entity.id().clone();
        if self.entities.insert(id.clone(), entity).is_none() {
            self.ids.push(id);
        }
    }

    /// Remove an entity by id
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.entities.remove(id)?;
        self.ids.retain(|existing| existing != id);
        Some(removed)
    }

    /// Look up an entity
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id)
    }

    /// Ids in input order
    pub fn ids(&self) -> &[T::Id] {
        &self.ids
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entities in input order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.ids.iter().filter_map(|id| self.entities.get(id))
    }

    /// Entities in `ids` order, cloned
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Entity> Default for EntityState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> FromIterator<T> for EntityState<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_entities(iter)
    }
}

/// Wire shape before normalization
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawEntityState<T: Entity> {
    #[serde(default)]
    ids: Vec<T::Id>,
    entities: HashMap<T::Id, T>,
}

impl<'de, T> Deserialize<'de> for EntityState<T>
where
    T: Entity + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEntityState::<T>::deserialize(deserializer)?;
        Ok(normalize(raw))
    }
}

/// Drop dangling and repeated ids, then append unlisted entities in id order
fn normalize<T: Entity>(raw: RawEntityState<T>) -> EntityState<T> {
    let RawEntityState { ids, entities } = raw;
    let mut ordered = Vec::with_capacity(entities.len());
    let mut seen = std::collections::HashSet::with_capacity(entities.len());

    for id in ids {
        if !entities.contains_key(&id) {
            tracing::warn!(?id, "Dropping id with no entity from snapshot");
            continue;
        }
        if seen.insert(id.clone()) {
            ordered.push(id);
        }
    }

    let mut unlisted: Vec<T::Id> = entities
        .keys()
        .filter(|id| !seen.contains(*id))
        .cloned()
        .collect();
    if !unlisted.is_empty() {
        tracing::warn!(count = unlisted.len(), "Snapshot entities missing from ids");
        unlisted.sort();
        ordered.extend(unlisted);
    }

    // Lookups go through the key, so a mismatched entity id is only reported.
    for (key, entity) in &entities {
        if entity.id() != key {
            tracing::warn!(?key, "Snapshot key does not match entity id");
        }
    }

    EntityState {
        ids: ordered,
        entities,
    }
}
