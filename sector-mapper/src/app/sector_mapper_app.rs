use super::{NotificationKind, Notifier, SectorMapperError};
use crate::config::SectorMapperConfig;
use crate::layer::{LayerManager, RebuildSummary};
use crate::list_panel::{GroupView, ListPanel};
use crate::locator::{LocateOutcome, Locator};
use crate::view::MapView;
use sector_mapper_core::model::entity::{Entity, EntityCategory, EntityDraft, EntityId};
use sector_mapper_core::model::thematic::{ThematicAttribute, ThematicSettings};
use sector_mapper_core::store::{EntityPersistence, EntityStore, StoreError};

/// application controller. owns the store and everything derived from it, and
/// runs each user operation as validate, mutate, persist, rebuild.
///
/// the in-memory store is authoritative: when persisting fails the change is
/// kept and the user is warned, nothing is rolled back. the one exception is a
/// failed load: the saved file is then left alone until the user clears all
/// data, so an unreadable file is never replaced by the empty session.
pub struct SectorMapperApp<P, V, N> {
    config: SectorMapperConfig,
    persistence: P,
    view: V,
    notifier: N,
    store: EntityStore,
    layers: LayerManager,
    list_panel: ListPanel,
    locator: Locator,
    load_failed: bool,
}

impl<P, V, N> SectorMapperApp<P, V, N>
where
    P: EntityPersistence,
    V: MapView,
    N: Notifier,
{
    pub fn new(config: SectorMapperConfig, persistence: P, view: V, notifier: N) -> Self {
        let layers = LayerManager::new(config.build_cluster_layer()).with_progress(config.progress_bar);
        SectorMapperApp {
            list_panel: config.build_list_panel(),
            locator: config.build_locator(),
            config,
            persistence,
            view,
            notifier,
            store: EntityStore::new(),
            layers,
            load_failed: false,
        }
    }

    pub fn config(&self) -> &SectorMapperConfig {
        &self.config
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut P {
        &mut self.persistence
    }

    pub fn list_panel(&self) -> &ListPanel {
        &self.list_panel
    }

    pub fn list_panel_mut(&mut self) -> &mut ListPanel {
        &mut self.list_panel
    }

    /// true while saving is suspended because the saved entities could not be read.
    pub fn is_save_suspended(&self) -> bool {
        self.load_failed
    }

    /// loads the saved entities, places their markers and frames the map.
    /// a failed load is reported and the app starts with an empty store that is
    /// not written back.
    pub fn start(&mut self) -> RebuildSummary {
        self.load_failed = false;
        self.store = match self.persistence.load() {
            Ok(entities) => EntityStore::from_entities(entities),
            Err(e) => {
                log::warn!("failed to load saved entities: {e}");
                self.notifier
                    .notify(&format!("Could not load saved data: {e}"), NotificationKind::Error);
                self.load_failed = true;
                EntityStore::new()
            }
        };
        if let Some(attribute) = self.config.thematic_attribute.as_deref() {
            let settings = self.thematic_settings(attribute);
            self.layers.set_thematic(settings);
        }
        let summary = self.layers.rebuild(&self.store);
        if self.config.fit_bounds_on_start {
            self.center_map();
        } else {
            self.view
                .set_view(self.config.default_center_point(), self.config.default_zoom);
        }
        if !self.store.is_empty() {
            let message = format!(
                "Restored {} sites and {} points",
                self.store.sites().count(),
                self.store.points().count()
            );
            log::info!("{message}");
            self.notifier.notify(&message, NotificationKind::Success);
        }
        summary
    }

    /// validates a form draft and adds it as a new entity with a fresh id.
    pub fn create(&mut self, draft: EntityDraft) -> Result<EntityId, SectorMapperError> {
        let validated = draft.validate().inspect_err(|e| {
            self.notifier.notify(&e.to_string(), NotificationKind::Error);
        })?;
        let id = self.fresh_id();
        let entity = validated.into_entity(id.clone());
        let message = format!("Added {}", entity.name);
        self.store.insert(entity)?;
        self.commit();
        self.notifier.notify(&message, NotificationKind::Success);
        Ok(id)
    }

    /// replaces the user-editable fields of an entity. id, category and custom
    /// properties are kept, as is the group unless the draft names a new one.
    pub fn edit(&mut self, id: &EntityId, draft: EntityDraft) -> Result<(), SectorMapperError> {
        if !self.store.contains(id) {
            self.notifier
                .notify(&format!("No entity with id {id}"), NotificationKind::Error);
            return Err(StoreError::EntityNotFound(id.clone()).into());
        }
        let validated = draft.validate().inspect_err(|e| {
            self.notifier.notify(&e.to_string(), NotificationKind::Error);
        })?;
        let name = self
            .store
            .update(id, |entity| validated.apply_to(entity))?
            .name
            .clone();
        self.commit();
        self.notifier
            .notify(&format!("Updated {name}"), NotificationKind::Success);
        Ok(())
    }

    pub fn delete(&mut self, id: &EntityId) -> Result<Entity, SectorMapperError> {
        let removed = self
            .store
            .remove(id)
            .ok_or_else(|| StoreError::EntityNotFound(id.clone()))?;
        self.commit();
        self.notifier
            .notify(&format!("Deleted {}", removed.name), NotificationKind::Success);
        Ok(removed)
    }

    /// deletes every entity of a group.
    ///
    /// # Returns
    ///
    /// the number of entities removed
    pub fn delete_group(&mut self, category: EntityCategory, group: &str) -> usize {
        let removed = self.store.remove_group(category, group);
        if removed.is_empty() {
            return 0;
        }
        self.layers.forget_group(category, group);
        self.list_panel.forget_group(category, group);
        self.commit();
        self.notifier.notify(
            &format!("Deleted group {group} ({} entities)", removed.len()),
            NotificationKind::Success,
        );
        removed.len()
    }

    /// renames a group within one category. hidden and expanded state follow the group.
    pub fn rename_group(&mut self, category: EntityCategory, old: &str, new: &str) -> usize {
        let new = new.trim();
        let renamed = self.store.rename_group(category, old, new);
        if renamed == 0 {
            return 0;
        }
        self.layers.rename_hidden_group(category, old, new);
        self.list_panel.rename_group(category, old, new);
        self.commit();
        self.notifier.notify(
            &format!("Renamed group {old} to {new}"),
            NotificationKind::Success,
        );
        renamed
    }

    /// shows or hides a group's markers. visibility is session state and is not persisted.
    ///
    /// # Returns
    ///
    /// true if the group is now hidden
    pub fn toggle_group_visibility(&mut self, category: EntityCategory, group: &str) -> bool {
        let hidden = self.layers.toggle_group(category, group);
        self.layers.rebuild(&self.store);
        let state = if hidden { "hidden" } else { "shown" };
        self.notifier
            .notify(&format!("Group {group} {state}"), NotificationKind::Info);
        hidden
    }

    /// adds already-parsed entities in bulk. entities whose id is blank or
    /// already taken get a fresh one.
    ///
    /// # Returns
    ///
    /// the ids the entities were stored under, in input order
    pub fn import(&mut self, entities: Vec<Entity>) -> Vec<EntityId> {
        let mut ids = Vec::with_capacity(entities.len());
        for mut entity in entities {
            if entity.id.as_str().trim().is_empty() || self.store.contains(&entity.id) {
                let fresh = self.fresh_id();
                log::debug!("import: reassigning id {} to {fresh}", entity.id);
                entity.id = fresh;
            }
            ids.push(entity.id.clone());
            if let Err(e) = self.store.insert(entity) {
                log::warn!("import: {e}");
                ids.pop();
            }
        }
        if ids.is_empty() {
            return ids;
        }
        self.commit();
        self.notifier.notify(
            &format!("Imported {} entities", ids.len()),
            NotificationKind::Success,
        );
        ids
    }

    /// removes every entity and resets group state. this is an explicit request
    /// to replace the saved data, so it also resumes saving after a failed load.
    pub fn clear_all(&mut self) {
        self.load_failed = false;
        self.store.clear();
        self.layers.clear_hidden_groups();
        self.list_panel.reset();
        self.commit();
        self.notifier
            .notify("All data cleared", NotificationKind::Success);
    }

    /// brings an entity's marker into view, opening its popup.
    ///
    /// # Returns
    ///
    /// false only when the entity is unknown or has no usable position
    pub fn locate(&mut self, id: &EntityId) -> bool {
        let outcome = self.locate_outcome(id);
        if !outcome.is_found() {
            self.notifier.notify(
                &format!("Could not find {id} on the map"),
                NotificationKind::Warning,
            );
        }
        outcome.is_found()
    }

    pub fn locate_outcome(&mut self, id: &EntityId) -> LocateOutcome {
        self.locator
            .locate(&self.store, &self.layers, &mut self.view, id)
    }

    /// frames every marker, or returns to the default center when there are none.
    pub fn center_map(&mut self) {
        match self.layers.bounds() {
            Some(bounds) => self.view.fit_bounds(bounds, self.config.fit_padding_px),
            None => self
                .view
                .set_view(self.config.default_center_point(), self.config.default_zoom),
        }
    }

    /// recolors imported points by `attribute` (a field name, or `custom:<name>`).
    ///
    /// # Returns
    ///
    /// false, leaving markers uncolored, when no imported point carries the attribute
    pub fn apply_thematic(&mut self, attribute: &str) -> bool {
        let settings = self.thematic_settings(attribute);
        let applied = settings.is_some();
        self.layers.set_thematic(settings);
        self.layers.rebuild(&self.store);
        if applied {
            self.notifier
                .notify("Thematic analysis applied", NotificationKind::Success);
        } else {
            self.notifier.notify(
                &format!("No imported points carry '{attribute}'"),
                NotificationKind::Warning,
            );
        }
        applied
    }

    pub fn clear_thematic(&mut self) {
        self.layers.set_thematic(None);
        self.layers.rebuild(&self.store);
        self.notifier
            .notify("Thematic analysis cleared", NotificationKind::Info);
    }

    fn thematic_settings(&self, attribute: &str) -> Option<ThematicSettings> {
        match attribute.parse::<ThematicAttribute>() {
            Ok(attribute) => ThematicSettings::generate(attribute, self.store.iter()),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    /// group views of the list panel for the current store.
    pub fn render_list(&self) -> Vec<GroupView> {
        self.list_panel.render(&self.store, &self.layers)
    }

    fn fresh_id(&self) -> EntityId {
        loop {
            let id = EntityId::generate();
            if !self.store.contains(&id) {
                return id;
            }
        }
    }

    /// persists the store and rebuilds the layers. the rebuild runs whether or
    /// not the save succeeded.
    fn commit(&mut self) {
        if self.load_failed {
            log::warn!("saved entities could not be loaded, not overwriting them");
            self.notifier.notify(
                "Changes kept in memory only: saved data could not be loaded and was left untouched",
                NotificationKind::Warning,
            );
        } else if let Err(e) = self.persistence.save(&self.store.snapshot()) {
            log::warn!("failed to persist entities: {e}");
            self.notifier.notify(
                &format!("Changes kept in memory but could not be saved: {e}"),
                NotificationKind::Warning,
            );
        }
        self.layers.rebuild(&self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::RecordingNotifier;
    use crate::layer::MarkerHandle;
    use crate::view::{HeadlessMapView, ViewEvent};
    use geo::Point;
    use sector_mapper_core::model::entity::{
        CustomProperty, LayerKind, Sector, ValidationError, DEFAULT_ICON_COLOR,
    };
    use sector_mapper_core::model::thematic::UNMATCHED_COLOR;
    use sector_mapper_core::store::{EntityPersistence, JsonFilePersistence, MemoryPersistence};
    use serde_json::json;

    type TestApp = SectorMapperApp<MemoryPersistence, HeadlessMapView, RecordingNotifier>;

    fn app(entities: Vec<Entity>) -> TestApp {
        let config = SectorMapperConfig::default();
        let view = config.build_headless_view();
        let mut app = SectorMapperApp::new(
            config,
            MemoryPersistence::new(entities),
            view,
            RecordingNotifier::default(),
        );
        app.start();
        app
    }

    fn saved() -> Vec<Entity> {
        serde_json::from_value(json!([
            {
                "id": "s1",
                "name": "Site A",
                "latitude": 40.0,
                "longitude": -74.0,
                "type": "structured_site",
                "sectors": [
                    { "azimuth": 0.0, "beamwidth": 65.0, "range": 500.0 },
                    { "azimuth": 120.0, "beamwidth": 65.0, "range": 500.0 }
                ]
            },
            {
                "id": "p1",
                "name": "Point B",
                "latitude": 40.1,
                "longitude": -74.1,
                "type": "manual_point"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_start_restores_and_fits_bounds() {
        let app = app(saved());
        assert_eq!(app.layers().len(), 2);
        assert_eq!(
            app.notifier().last(),
            Some(&(
                NotificationKind::Success,
                String::from("Restored 1 sites and 1 points")
            ))
        );
        assert!(matches!(
            app.view().events().last(),
            Some(ViewEvent::FitBounds { .. })
        ));
    }

    #[test]
    fn test_start_empty_uses_default_center() {
        let app = app(vec![]);
        assert_eq!(app.view().center(), Point::new(-7.5898, 33.5731));
        assert_eq!(app.view().zoom(), 6);
        assert!(app.notifier().messages().is_empty());
    }

    #[test]
    fn test_failed_load_starts_empty() {
        let config = SectorMapperConfig::default();
        let view = config.build_headless_view();
        let mut persistence = MemoryPersistence::new(saved());
        persistence.fail_loads = true;
        let mut app = SectorMapperApp::new(config, persistence, view, RecordingNotifier::default());
        app.start();
        assert!(app.store().is_empty());
        assert_eq!(app.notifier().count(NotificationKind::Error), 1);
    }

    #[test]
    fn test_failed_load_does_not_overwrite_saved_data() {
        let config = SectorMapperConfig::default();
        let view = config.build_headless_view();
        let mut persistence = MemoryPersistence::new(saved());
        persistence.fail_loads = true;
        let mut app = SectorMapperApp::new(config, persistence, view, RecordingNotifier::default());
        app.start();
        assert!(app.is_save_suspended());

        let id = app
            .create(EntityDraft::new("Session only", 10.0, 10.0, EntityCategory::ManualPoint))
            .unwrap();
        assert!(app.layers().find_by_tag(&id).is_some());
        assert_eq!(app.persistence().save_count(), 0);
        assert_eq!(app.persistence().stored(), saved().as_slice());
        assert_eq!(app.notifier().count(NotificationKind::Warning), 1);

        // clearing everything is an explicit overwrite
        app.clear_all();
        assert!(!app.is_save_suspended());
        assert_eq!(app.persistence().save_count(), 1);
        assert!(app.persistence().stored().is_empty());
    }

    #[test]
    fn test_record_without_coordinates_keeps_file_intact() {
        let dir = std::env::temp_dir().join(format!("sector-mapper-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("missing_latitude.json");
        let mut records = serde_json::to_value(saved()).unwrap();
        records.as_array_mut().unwrap().push(json!({
            "id": "nolat",
            "name": "No latitude",
            "longitude": -74.2,
            "type": "kml_point",
            "group": "towers.kml"
        }));
        std::fs::write(&path, records.to_string()).unwrap();

        let config = SectorMapperConfig::default();
        let view = config.build_headless_view();
        let mut app = SectorMapperApp::new(
            config,
            JsonFilePersistence::new(&path),
            view,
            RecordingNotifier::default(),
        );
        app.start();
        assert!(!app.is_save_suspended());
        assert_eq!(app.store().len(), 3);
        assert_eq!(app.layers().len(), 2);
        assert_eq!(app.notifier().count(NotificationKind::Error), 0);

        app.create(EntityDraft::new("New", 35.0, -5.0, EntityCategory::ManualPoint))
            .unwrap();
        let reloaded = JsonFilePersistence::new(&path).load().unwrap();
        assert_eq!(reloaded.len(), 4);
        assert!(reloaded.iter().any(|e| e.id == EntityId::new("nolat")));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_thematic_analysis() {
        let mut app = app(saved());
        let imported = ["4G", "5G", "4G"]
            .iter()
            .enumerate()
            .map(|(i, technology)| {
                Entity::new(
                    EntityId::new(format!("k{i}")),
                    format!("Placemark {i}"),
                    30.0,
                    -5.0 + i as f64,
                    EntityCategory::ImportedPoint,
                )
                .with_group("drive.kml")
                .with_custom_property(CustomProperty::new("Technology", *technology))
            })
            .collect::<Vec<_>>();
        let ids = app.import(imported);
        let fill = |app: &TestApp, id: &EntityId| {
            app.layers().find_by_tag(id).unwrap().descriptor.fill_color.clone()
        };

        assert!(app.apply_thematic("custom:Technology"));
        assert_eq!(fill(&app, &ids[0]), "#3b82f6");
        assert_eq!(fill(&app, &ids[1]), "#ef4444");
        assert_eq!(fill(&app, &ids[0]), fill(&app, &ids[2]));
        assert_eq!(fill(&app, &EntityId::new("p1")), "#3b82f6");

        // edits rebuild under the active theme
        let id = app.import(vec![Entity::new(
            EntityId::new("k9"),
            "Untagged",
            31.0,
            -5.0,
            EntityCategory::ImportedPoint,
        )]);
        assert_eq!(fill(&app, &id[0]), UNMATCHED_COLOR);

        assert!(!app.apply_thematic("custom:Missing"));
        assert!(app.layers().thematic().is_none());
        assert_eq!(fill(&app, &ids[1]), DEFAULT_ICON_COLOR);

        app.apply_thematic("custom:Technology");
        app.clear_thematic();
        assert!(app.layers().thematic().is_none());
        assert_eq!(fill(&app, &ids[1]), DEFAULT_ICON_COLOR);
    }

    #[test]
    fn test_configured_theme_applies_on_start() {
        let mut entities = saved();
        entities.push(
            Entity::new(
                EntityId::new("k1"),
                "Drive test",
                33.0,
                -7.0,
                EntityCategory::ImportedPoint,
            )
            .with_custom_property(CustomProperty::new("RSRP", json!(-120))),
        );
        let config = SectorMapperConfig {
            thematic_attribute: Some(String::from("custom:RSRP")),
            ..Default::default()
        };
        let view = config.build_headless_view();
        let mut app = SectorMapperApp::new(
            config,
            MemoryPersistence::new(entities),
            view,
            RecordingNotifier::default(),
        );
        app.start();
        let marker = app.layers().find_by_tag(&EntityId::new("k1")).unwrap();
        assert_eq!(marker.descriptor.fill_color, "#ef4444");
    }

    #[test]
    fn test_locate_site_and_point() {
        let mut app = app(saved());
        assert!(app.locate(&EntityId::new("s1")));
        assert_eq!(app.view().open_popup_tag(), Some(&EntityId::new("s1")));
        let site_handle = app.layers().find_by_tag(&EntityId::new("s1")).unwrap().handle;
        assert_eq!(app.view().active_highlights(), vec![site_handle]);

        assert!(app.locate(&EntityId::new("p1")));
        assert_eq!(app.view().zoom(), 18);
        assert_eq!(app.view().center(), Point::new(-74.1, 40.1));
        assert_eq!(app.view().open_popup_tag(), Some(&EntityId::new("p1")));

        app.view_mut().advance(std::time::Duration::from_secs(2));
        assert!(app.view().active_highlights().is_empty());
    }

    #[test]
    fn test_locate_unknown_id() {
        let mut app = app(saved());
        app.view_mut().take_events();
        assert!(!app.locate(&EntityId::new("nope")));
        assert!(app.view().events().is_empty());
        assert_eq!(app.notifier().count(NotificationKind::Warning), 1);
    }

    #[test]
    fn test_delete_removes_marker() {
        let mut app = app(saved());
        let id = EntityId::new("p1");
        app.delete(&id).unwrap();
        assert_eq!(app.layers().markers_tagged(&id), 0);
        assert!(!app.locate(&id));
        assert_eq!(app.persistence().stored().len(), 1);
        assert!(app.delete(&id).is_err());
    }

    #[test]
    fn test_delete_site_removes_clustered_marker() {
        let mut app = app(saved());
        let id = EntityId::new("s1");
        assert_eq!(app.layers().clustered().len(), 1);
        let removed = app.delete(&id).unwrap();
        assert_eq!(removed.sectors.len(), 2);
        assert_eq!(app.layers().markers_tagged(&id), 0);
        assert!(app.layers().clustered().is_empty());
        assert!(app.layers().clustered().find_by_tag(&id).is_none());
        assert!(!app.locate(&id));
        assert_eq!(app.persistence().stored().len(), 1);
        assert_eq!(app.store().sites().count(), 0);
    }

    #[test]
    fn test_create_and_locate() {
        let mut app = app(vec![]);
        let draft = EntityDraft::new("New point", 35.0, -5.0, EntityCategory::ManualPoint)
            .with_color("#ff0000");
        let id = app.create(draft).unwrap();
        let marker = app.layers().find_by_tag(&id).unwrap();
        assert_eq!(marker.handle.layer, LayerKind::Flat);
        assert_eq!(marker.descriptor.fill_color, "#ff0000");
        assert_eq!(app.store().get(&id).unwrap().group_name(), "Manual");
        assert_eq!(app.persistence().save_count(), 1);

        assert!(app.locate(&id));
        assert_eq!(app.view().center(), Point::new(-5.0, 35.0));
    }

    #[test]
    fn test_invalid_draft_leaves_store_untouched() {
        let mut app = app(saved());
        let draft = EntityDraft::new("Nowhere", f64::NAN, -74.0, EntityCategory::ManualPoint);
        let result = app.create(draft);
        assert!(matches!(
            result,
            Err(SectorMapperError::Validation(ValidationError::InvalidCoordinate { .. }))
        ));
        assert_eq!(app.store().len(), 2);
        assert_eq!(app.persistence().save_count(), 0);
        assert_eq!(app.notifier().count(NotificationKind::Error), 1);

        let draft = EntityDraft::new("  ", 1.0, 1.0, EntityCategory::ManualPoint);
        assert!(app.edit(&EntityId::new("p1"), draft).is_err());
        assert_eq!(app.store().get(&EntityId::new("p1")).unwrap().name, "Point B");
    }

    #[test]
    fn test_edit_preserves_identity() {
        let mut app = app(saved());
        let id = EntityId::new("s1");
        let draft = EntityDraft::new("Site A2", 40.5, -74.5, EntityCategory::ManualPoint)
            .with_sectors(vec![Sector::new(90.0, 30.0, 1000.0)]);
        app.edit(&id, draft).unwrap();
        let entity = app.store().get(&id).unwrap();
        assert_eq!(entity.name, "Site A2");
        assert_eq!(entity.category, EntityCategory::StructuredSite);
        assert_eq!(entity.sectors.len(), 1);
        let marker = app.layers().find_by_tag(&id).unwrap();
        assert_eq!(marker.position, Point::new(-74.5, 40.5));
        assert_eq!(app.layers().markers_tagged(&id), 1);
    }

    #[test]
    fn test_save_failure_keeps_memory() {
        let mut app = app(saved());
        app.persistence_mut().fail_saves = true;
        let id = app
            .create(EntityDraft::new("Unsaved", 10.0, 10.0, EntityCategory::ManualPoint))
            .unwrap();
        assert!(app.store().contains(&id));
        assert!(app.layers().find_by_tag(&id).is_some());
        assert_eq!(app.persistence().stored().len(), 2);
        assert_eq!(app.notifier().count(NotificationKind::Warning), 1);
    }

    #[test]
    fn test_malformed_entity_does_not_block_others() {
        let mut entities = saved();
        let broken: Entity = serde_json::from_value(json!({
            "id": "bad",
            "name": "Broken",
            "latitude": "not a number",
            "longitude": -74.0,
            "type": "kml_point"
        }))
        .unwrap();
        entities.insert(0, broken);
        let mut app = app(entities);
        assert_eq!(app.store().len(), 3);
        assert_eq!(app.layers().len(), 2);
        assert!(!app.locate(&EntityId::new("bad")));
        assert!(app.locate(&EntityId::new("p1")));
    }

    #[test]
    fn test_group_operations() {
        let mut app = app(vec![]);
        let imported = (0..3)
            .map(|i| {
                Entity::new(
                    EntityId::new(format!("k{i}")),
                    format!("Placemark {i}"),
                    30.0 + f64::from(i),
                    -5.0,
                    EntityCategory::ImportedPoint,
                )
                .with_group("towers.kml")
            })
            .collect::<Vec<_>>();
        let ids = app.import(imported.clone());
        assert_eq!(ids.len(), 3);
        // importing again reassigns colliding ids
        let again = app.import(imported);
        assert!(again.iter().all(|id| !ids.contains(id)));
        assert_eq!(app.store().len(), 6);

        assert!(app.toggle_group_visibility(EntityCategory::ImportedPoint, "towers.kml"));
        assert!(app.layers().is_empty());
        assert_eq!(app.rename_group(EntityCategory::ImportedPoint, "towers.kml", "masts.kml"), 6);
        assert!(app
            .layers()
            .is_group_hidden(EntityCategory::ImportedPoint, "masts.kml"));
        assert!(!app.toggle_group_visibility(EntityCategory::ImportedPoint, "masts.kml"));
        assert_eq!(app.layers().len(), 6);

        let views = app.render_list();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "masts.kml");

        assert_eq!(app.delete_group(EntityCategory::ImportedPoint, "masts.kml"), 6);
        assert!(app.store().is_empty());
        assert!(app.layers().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut app = app(saved());
        app.clear_all();
        assert!(app.store().is_empty());
        assert!(app.layers().is_empty());
        assert!(app.persistence().stored().is_empty());
        app.center_map();
        assert_eq!(app.view().zoom(), 6);
    }

    #[test]
    fn test_handles_reset_on_rebuild() {
        let mut app = app(saved());
        let before: MarkerHandle = app.layers().find_by_tag(&EntityId::new("p1")).unwrap().handle;
        app.create(EntityDraft::new("Another", 1.0, 1.0, EntityCategory::ManualPoint))
            .unwrap();
        let after = app.layers().find_by_tag(&EntityId::new("p1")).unwrap().handle;
        assert_eq!(before, after);
    }
}
