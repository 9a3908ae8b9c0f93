use super::{ClusterLayer, FlatLayer, MarkerHandle, PlacedMarker, PopupContent, RebuildSummary};
use geo::{BoundingRect, MultiPoint, Rect};
use kdam::tqdm;
use sector_mapper_core::model::entity::{Entity, EntityCategory, EntityId, LayerKind};
use sector_mapper_core::model::marker::MarkerFactory;
use sector_mapper_core::model::thematic::ThematicSettings;
use sector_mapper_core::store::EntityStore;
use std::collections::HashSet;

/// owns the clustered and flat marker layers and keeps them in step with the
/// entity store.
///
/// every marker is tagged with its entity id when it is created, and each layer
/// indexes those tags, so finding the marker for an id never depends on how the
/// clustering layer currently groups its markers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerManager {
    clustered: ClusterLayer,
    flat: FlatLayer,
    hidden_groups: HashSet<(EntityCategory, String)>,
    thematic: Option<ThematicSettings>,
    show_progress: bool,
}

impl Default for LayerManager {
    fn default() -> Self {
        LayerManager::new(ClusterLayer::default())
    }
}

impl LayerManager {
    pub fn new(clustered: ClusterLayer) -> LayerManager {
        LayerManager {
            clustered,
            flat: FlatLayer::default(),
            hidden_groups: HashSet::new(),
            thematic: None,
            show_progress: false,
        }
    }

    /// shows a progress bar while placing markers (for large stores on a terminal).
    pub fn with_progress(mut self, show_progress: bool) -> LayerManager {
        self.show_progress = show_progress;
        self
    }

    pub fn clustered(&self) -> &ClusterLayer {
        &self.clustered
    }

    pub fn flat(&self) -> &FlatLayer {
        &self.flat
    }

    pub fn thematic(&self) -> Option<&ThematicSettings> {
        self.thematic.as_ref()
    }

    /// sets or clears the marker theme. takes effect on the next rebuild.
    pub fn set_thematic(&mut self, thematic: Option<ThematicSettings>) {
        self.thematic = thematic;
    }

    /// clears both layers and repopulates them from the store.
    ///
    /// entities with unusable coordinates, or in a hidden group, get no marker;
    /// one bad entity never stops the rest from being placed. the whole rebuild
    /// runs to completion before returning, so callers never observe a layer
    /// that is only partly populated. calling it twice on the same store
    /// produces identical layers.
    pub fn rebuild(&mut self, store: &EntityStore) -> RebuildSummary {
        self.clustered.clear();
        self.flat.clear();
        let mut summary = RebuildSummary::default();

        let entities: Box<dyn Iterator<Item = &Entity> + '_> = if self.show_progress {
            Box::new(tqdm!(
                store.iter(),
                total = store.len(),
                desc = "placing markers"
            ))
        } else {
            Box::new(store.iter())
        };

        for entity in entities {
            if self.is_group_hidden(entity.category, entity.group_name()) {
                summary.hidden += 1;
                continue;
            }
            let position = match entity.try_position() {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("skipping marker: {e}");
                    summary.skipped.push(entity.id.clone());
                    continue;
                }
            };
            let theme_color = self
                .thematic
                .as_ref()
                .filter(|_| ThematicSettings::applies_to(entity))
                .map(|t| t.color_for(entity));
            let descriptor = MarkerFactory::build_with_color(entity, theme_color);
            let popup = PopupContent::from(entity);
            match entity.layer_kind() {
                LayerKind::Clustered => {
                    self.clustered
                        .add(entity.id.clone(), position, descriptor, popup);
                    summary.clustered += 1;
                }
                LayerKind::Flat => {
                    self.flat
                        .add(entity.id.clone(), position, descriptor, popup);
                    summary.flat += 1;
                }
            }
        }
        if self.show_progress {
            eprintln!();
        }

        log::debug!(
            "rebuilt layers: {} clustered, {} flat, {} hidden, {} skipped",
            summary.clustered,
            summary.flat,
            summary.hidden,
            summary.skipped.len()
        );
        summary
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&PlacedMarker> {
        match handle.layer {
            LayerKind::Clustered => self.clustered.get(handle),
            LayerKind::Flat => self.flat.get(handle),
        }
    }

    /// the live marker tagged with `id`, from either layer.
    pub fn find_by_tag(&self, id: &EntityId) -> Option<&PlacedMarker> {
        self.flat
            .find_by_tag(id)
            .or_else(|| self.clustered.find_by_tag(id))
    }

    /// all live markers, flat layer first, each in insertion order.
    pub fn iter_markers(&self) -> impl Iterator<Item = &PlacedMarker> {
        self.flat
            .markers()
            .iter()
            .chain(self.clustered.markers().iter())
    }

    /// number of live markers carrying `id` as their tag, across both layers.
    pub fn markers_tagged(&self, id: &EntityId) -> usize {
        self.iter_markers().filter(|m| &m.tag == id).count()
    }

    pub fn len(&self) -> usize {
        self.flat.len() + self.clustered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty() && self.clustered.is_empty()
    }

    /// bounds covering every live marker.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.iter_markers()
            .map(|m| m.position)
            .collect::<MultiPoint<f64>>()
            .bounding_rect()
    }

    pub fn is_group_hidden(&self, category: EntityCategory, group: &str) -> bool {
        self.hidden_groups
            .contains(&(category, group.to_string()))
    }

    /// hides or shows a group. takes effect on the next rebuild.
    ///
    /// # Returns
    ///
    /// true if the visibility changed
    pub fn set_group_hidden(&mut self, category: EntityCategory, group: &str, hidden: bool) -> bool {
        let key = (category, group.to_string());
        if hidden {
            self.hidden_groups.insert(key)
        } else {
            self.hidden_groups.remove(&key)
        }
    }

    /// flips the visibility of a group and returns whether it is now hidden.
    pub fn toggle_group(&mut self, category: EntityCategory, group: &str) -> bool {
        let now_hidden = !self.is_group_hidden(category, group);
        self.set_group_hidden(category, group, now_hidden);
        now_hidden
    }

    /// carries the hidden state of a group over to its new name.
    pub fn rename_hidden_group(&mut self, category: EntityCategory, old: &str, new: &str) {
        if self.hidden_groups.remove(&(category, old.to_string())) {
            self.hidden_groups.insert((category, new.to_string()));
        }
    }

    pub fn forget_group(&mut self, category: EntityCategory, group: &str) {
        self.hidden_groups.remove(&(category, group.to_string()));
    }

    pub fn clear_hidden_groups(&mut self) {
        self.hidden_groups.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sector_mapper_core::model::entity::{CustomProperty, Sector, DEFAULT_ICON_COLOR};
    use sector_mapper_core::model::thematic::ThematicAttribute;

    fn store() -> EntityStore {
        EntityStore::from_entities(vec![
            Entity::new(
                EntityId::new("site"),
                "Site",
                40.0,
                -74.0,
                EntityCategory::StructuredSite,
            )
            .with_sectors(vec![Sector::new(0.0, 65.0, 500.0), Sector::new(120.0, 65.0, 500.0)]),
            Entity::new(
                EntityId::new("point"),
                "Point",
                40.1,
                -74.1,
                EntityCategory::ManualPoint,
            ),
        ])
    }

    #[test]
    fn test_rebuild_partitions_by_category() {
        let mut layers = LayerManager::default();
        let summary = layers.rebuild(&store());
        assert_eq!(summary.flat, 1);
        assert_eq!(summary.clustered, 1);
        assert_eq!(layers.flat().len(), 1);
        assert_eq!(layers.clustered().len(), 1);
        let site = layers.find_by_tag(&EntityId::new("site")).unwrap();
        assert_eq!(site.handle.layer, LayerKind::Clustered);
        assert_eq!(site.popup.sector_count, Some(2));
        let point = layers.find_by_tag(&EntityId::new("point")).unwrap();
        assert_eq!(point.handle.layer, LayerKind::Flat);
        assert_eq!(layers.marker(point.handle), Some(point));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let store = store();
        let mut layers = LayerManager::default();
        layers.rebuild(&store);
        let once = layers.clone();
        layers.rebuild(&store);
        assert_eq!(layers, once);
    }

    #[test]
    fn test_malformed_entity_is_skipped() {
        let mut store = store();
        store
            .insert(Entity::new(
                EntityId::new("nan"),
                "Broken",
                f64::NAN,
                -74.0,
                EntityCategory::ImportedPoint,
            ))
            .unwrap();
        store
            .insert(Entity::new(
                EntityId::new("later"),
                "Later",
                41.0,
                -73.0,
                EntityCategory::ImportedPoint,
            ))
            .unwrap();
        let mut layers = LayerManager::default();
        let summary = layers.rebuild(&store);
        assert_eq!(summary.skipped, vec![EntityId::new("nan")]);
        assert_eq!(summary.placed(), 3);
        assert_eq!(layers.markers_tagged(&EntityId::new("nan")), 0);
        assert!(layers.find_by_tag(&EntityId::new("later")).is_some());
    }

    #[test]
    fn test_every_visible_entity_has_exactly_one_marker() {
        let store = store();
        let mut layers = LayerManager::default();
        layers.rebuild(&store);
        for entity in store.iter() {
            assert_eq!(layers.markers_tagged(&entity.id), 1);
        }
        assert_eq!(layers.len(), store.len());
    }

    #[test]
    fn test_hidden_groups() {
        let store = store();
        let mut layers = LayerManager::default();
        assert!(layers.toggle_group(EntityCategory::ManualPoint, "Manual"));
        let summary = layers.rebuild(&store);
        assert_eq!(summary.hidden, 1);
        assert!(layers.find_by_tag(&EntityId::new("point")).is_none());

        layers.rename_hidden_group(EntityCategory::ManualPoint, "Manual", "Field");
        assert!(layers.is_group_hidden(EntityCategory::ManualPoint, "Field"));
        assert!(!layers.is_group_hidden(EntityCategory::ManualPoint, "Manual"));

        assert!(!layers.toggle_group(EntityCategory::ManualPoint, "Field"));
        layers.rebuild(&store);
        assert!(layers.find_by_tag(&EntityId::new("point")).is_some());
    }

    #[test]
    fn test_bounds() {
        let mut layers = LayerManager::default();
        assert!(layers.bounds().is_none());
        layers.rebuild(&store());
        let rect = layers.bounds().unwrap();
        assert_eq!(rect.min().x, -74.1);
        assert_eq!(rect.max().y, 40.1);
    }

    #[test]
    fn test_thematic_recolors_imported_points_only() {
        let mut store = store();
        for (id, technology) in [("k1", "4G"), ("k2", "5G")] {
            store
                .insert(
                    Entity::new(
                        EntityId::new(id),
                        id,
                        41.0,
                        -73.0,
                        EntityCategory::ImportedPoint,
                    )
                    .with_custom_property(CustomProperty::new("Technology", technology)),
                )
                .unwrap();
        }
        let attribute: ThematicAttribute = "custom:Technology".parse().unwrap();
        let settings = ThematicSettings::generate(attribute, store.iter()).unwrap();
        let mut layers = LayerManager::default();
        layers.set_thematic(Some(settings));
        layers.rebuild(&store);
        let color = |layers: &LayerManager, id: &str| {
            layers
                .find_by_tag(&EntityId::new(id))
                .unwrap()
                .descriptor
                .fill_color
                .clone()
        };
        assert_eq!(color(&layers, "k1"), "#3b82f6");
        assert_eq!(color(&layers, "k2"), "#ef4444");
        // manual points keep their own color
        assert_eq!(color(&layers, "point"), DEFAULT_ICON_COLOR);

        layers.set_thematic(None);
        layers.rebuild(&store);
        assert_eq!(color(&layers, "k2"), DEFAULT_ICON_COLOR);
    }
}
