use super::{GroupView, ListItem};
use crate::layer::LayerManager;
use itertools::Itertools;
use sector_mapper_core::model::entity::{Entity, EntityCategory, LayerKind};
use sector_mapper_core::store::EntityStore;
use std::collections::HashMap;

pub const DEFAULT_INITIAL_CAP: usize = 50;
pub const DEFAULT_LOAD_MORE_BATCH: usize = 100;

/// grouped and paginated listing of the store.
///
/// the panel keeps only presentation state (filter, search term and how far
/// each group has been expanded); entities are always read from the store, so
/// the listing cannot drift from what is on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPanel {
    initial_cap: usize,
    batch: usize,
    layer_filter: Option<LayerKind>,
    search: String,
    revealed: HashMap<(EntityCategory, String), usize>,
}

impl Default for ListPanel {
    fn default() -> Self {
        ListPanel::new(DEFAULT_INITIAL_CAP, DEFAULT_LOAD_MORE_BATCH)
    }
}

impl ListPanel {
    pub fn new(initial_cap: usize, batch: usize) -> ListPanel {
        ListPanel {
            initial_cap,
            batch: batch.max(1),
            layer_filter: None,
            search: String::new(),
            revealed: HashMap::new(),
        }
    }

    pub fn layer_filter(&self) -> Option<LayerKind> {
        self.layer_filter
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    /// restricts the listing to one layer (None lists both) and to names
    /// containing `search`. changing either collapses every group back to the
    /// initial cap.
    pub fn set_filter(&mut self, layer_filter: Option<LayerKind>, search: &str) {
        let search = search.trim().to_string();
        if layer_filter != self.layer_filter || search != self.search {
            self.layer_filter = layer_filter;
            self.search = search;
            self.revealed.clear();
        }
    }

    /// number of items currently revealed for a group.
    pub fn cap(&self, category: EntityCategory, group: &str) -> usize {
        self.revealed
            .get(&(category, group.to_string()))
            .copied()
            .unwrap_or(self.initial_cap)
    }

    /// reveals one more batch of a group and returns the new cap.
    pub fn load_more(&mut self, category: EntityCategory, group: &str) -> usize {
        let cap = self.cap(category, group) + self.batch;
        self.revealed.insert((category, group.to_string()), cap);
        cap
    }

    /// carries the expansion state of a group over to its new name.
    pub fn rename_group(&mut self, category: EntityCategory, old: &str, new: &str) {
        if let Some(cap) = self.revealed.remove(&(category, old.to_string())) {
            self.revealed.insert((category, new.to_string()), cap);
        }
    }

    pub fn forget_group(&mut self, category: EntityCategory, group: &str) {
        self.revealed.remove(&(category, group.to_string()));
    }

    pub fn reset(&mut self) {
        self.revealed.clear();
    }

    fn matches(&self, entity: &Entity) -> bool {
        self.layer_filter
            .map(|kind| entity.layer_kind() == kind)
            .unwrap_or(true)
    }

    /// builds the group views for the current filter, ordered by category then
    /// group name. entities keep store order inside a group.
    pub fn render(&self, store: &EntityStore, layers: &LayerManager) -> Vec<GroupView> {
        store
            .search(&self.search)
            .filter(|e| self.matches(e))
            .into_group_map_by(|e| (e.category, e.group_name().to_string()))
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|((category, name), entities)| {
                let total = entities.len();
                let cap = self.cap(category, &name);
                let items = entities.iter().take(cap).map(|e| ListItem::from(*e)).collect_vec();
                GroupView {
                    category,
                    hidden: layers.is_group_hidden(category, &name),
                    remaining: total - items.len(),
                    name,
                    total,
                    items,
                }
            })
            .collect_vec()
    }
}
