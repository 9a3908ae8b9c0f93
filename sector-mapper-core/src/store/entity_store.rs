use super::StoreError;
use crate::model::entity::{Entity, EntityCategory, EntityId, LayerKind};
use geo::{BoundingRect, MultiPoint, Rect};
use indexmap::IndexMap;
use itertools::Itertools;

/// the single in-memory source of truth for sites and points, keyed by id.
///
/// sites and points live in one insertion-ordered map; the split into the
/// clustered and flat layers is derived from each entity's category when the
/// layers are rebuilt, so there is no second list to keep in sync.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    entities: IndexMap<EntityId, Entity>,
}

impl EntityStore {
    pub fn new() -> EntityStore {
        EntityStore::default()
    }

    /// builds a store from a loaded list. when an id repeats, the first
    /// occurrence wins and later ones are dropped with a warning.
    pub fn from_entities(entities: Vec<Entity>) -> EntityStore {
        let mut store = EntityStore::new();
        for entity in entities {
            let id = entity.id.clone();
            if let Err(e) = store.insert(entity) {
                log::warn!("dropping entity {id} while loading store: {e}");
            }
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn insert(&mut self, entity: Entity) -> Result<(), StoreError> {
        if self.entities.contains_key(&entity.id) {
            return Err(StoreError::DuplicateId(entity.id));
        }
        self.entities.insert(entity.id.clone(), entity);
        Ok(())
    }

    /// mutates an entity in place. the id cannot be changed through this call.
    pub fn update<F>(&mut self, id: &EntityId, f: F) -> Result<&Entity, StoreError>
    where
        F: FnOnce(&mut Entity),
    {
        let entity = self
            .entities
            .get_mut(id)
            .ok_or_else(|| StoreError::EntityNotFound(id.clone()))?;
        f(entity);
        entity.id = id.clone();
        Ok(&*entity)
    }

    /// removes an entity, keeping the order of the remaining ones.
    pub fn remove(&mut self, id: &EntityId) -> Option<Entity> {
        self.entities.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn of_kind(&self, kind: LayerKind) -> impl Iterator<Item = &Entity> {
        self.iter().filter(move |e| e.layer_kind() == kind)
    }

    pub fn of_category(&self, category: EntityCategory) -> impl Iterator<Item = &Entity> {
        self.iter().filter(move |e| e.category == category)
    }

    /// entities rendered in the clustering layer.
    pub fn sites(&self) -> impl Iterator<Item = &Entity> {
        self.of_kind(LayerKind::Clustered)
    }

    /// entities rendered in the flat layer.
    pub fn points(&self) -> impl Iterator<Item = &Entity> {
        self.of_kind(LayerKind::Flat)
    }

    /// group names within a category with their entity counts, sorted by name.
    pub fn groups(&self, category: EntityCategory) -> Vec<(String, usize)> {
        self.of_category(category)
            .map(|e| e.group_name().to_string())
            .counts()
            .into_iter()
            .sorted()
            .collect_vec()
    }

    /// moves every entity of `category` in group `old` to group `new`.
    ///
    /// # Returns
    ///
    /// the number of entities that changed group
    pub fn rename_group(&mut self, category: EntityCategory, old: &str, new: &str) -> usize {
        let new = new.trim();
        if new.is_empty() || new == old {
            return 0;
        }
        let mut updated = 0;
        for entity in self.entities.values_mut() {
            if entity.category == category && entity.group_name() == old {
                entity.group = Some(new.to_string());
                updated += 1;
            }
        }
        updated
    }

    /// removes every entity of `category` belonging to `group`, returning them.
    pub fn remove_group(&mut self, category: EntityCategory, group: &str) -> Vec<Entity> {
        let ids = self
            .of_category(category)
            .filter(|e| e.group_name() == group)
            .map(|e| e.id.clone())
            .collect_vec();
        ids.iter().filter_map(|id| self.remove(id)).collect_vec()
    }

    /// entities whose name contains `term`, ignoring case. a blank term matches everything.
    pub fn search<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Entity> + 'a {
        let needle = term.trim().to_lowercase();
        self.iter()
            .filter(move |e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
    }

    /// copy of all entities in store order, as handed to persistence.
    pub fn snapshot(&self) -> Vec<Entity> {
        self.entities.values().cloned().collect_vec()
    }

    /// bounds of every entity with a usable position.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.iter()
            .filter_map(|e| e.try_position().ok())
            .collect::<MultiPoint<f64>>()
            .bounding_rect()
    }
}
