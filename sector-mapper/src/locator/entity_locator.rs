use super::LocateOutcome;
use crate::layer::{LayerManager, PlacedMarker, ZoomToShow};
use crate::view::MapView;
use sector_mapper_core::model::entity::EntityId;
use sector_mapper_core::store::EntityStore;
use sector_mapper_core::util::geo_utils;
use std::time::Duration;

/// finds the marker for an entity and brings it into view.
///
/// lookups go through the layers' tag indexes first. for the clustering layer
/// the current tree of cluster nodes is walked as a second attempt. if no
/// tagged marker exists, the first marker at the entity's coordinates is used,
/// and failing that the view simply flies to the stored position.
#[derive(Debug, Clone, PartialEq)]
pub struct Locator {
    pub locate_zoom: u8,
    pub fallback_zoom: u8,
    pub highlight: Duration,
    pub coordinate_epsilon: f64,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            locate_zoom: 18,
            fallback_zoom: 16,
            highlight: Duration::from_millis(2000),
            coordinate_epsilon: 1e-5,
        }
    }
}

impl Locator {
    /// locates the entity `id`.
    ///
    /// # Arguments
    ///
    /// * `store` - entities, used to resolve the id and its stored position
    /// * `layers` - the marker layers built from `store`
    /// * `view` - map view to move
    /// * `id` - entity to locate
    ///
    /// # Returns
    ///
    /// how the entity was found. on [`LocateOutcome::NotFound`] the view is untouched.
    pub fn locate(
        &self,
        store: &EntityStore,
        layers: &LayerManager,
        view: &mut dyn MapView,
        id: &EntityId,
    ) -> LocateOutcome {
        let entity = match store.get(id) {
            Some(e) => e,
            None => {
                log::debug!("locate: no entity with id {id}");
                return LocateOutcome::NotFound;
            }
        };

        if let Some(marker) = layers.flat().find_by_tag(id) {
            view.set_view(marker.position, self.locate_zoom);
            self.reveal(view, marker);
            return LocateOutcome::Flat {
                handle: marker.handle,
            };
        }

        let clustered = layers.clustered();
        let cluster_hit = clustered
            .find_by_tag(id)
            .or_else(|| clustered.search_children(id, view.zoom()));
        if let Some(marker) = cluster_hit {
            let handle = marker.handle;
            let shown = clustered
                .zoom_to_show_layer(handle, view, |v, m| self.reveal(v, m))
                .unwrap_or(ZoomToShow {
                    zoom: clustered.max_zoom(),
                    spiderfied: true,
                });
            return LocateOutcome::Clustered {
                handle,
                reveal_zoom: shown.zoom,
                spiderfied: shown.spiderfied,
            };
        }

        let position = match entity.try_position() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("locate: {e}");
                return LocateOutcome::NotFound;
            }
        };

        let nearby = layers.iter_markers().find(|m| {
            geo_utils::within_epsilon(&m.position, &position, self.coordinate_epsilon)
        });
        if let Some(marker) = nearby {
            log::debug!(
                "locate: {id} has no tagged marker, using {} at the same position",
                marker.tag
            );
            view.set_view(marker.position, self.locate_zoom);
            view.open_popup(marker);
            return LocateOutcome::Approximate {
                handle: marker.handle,
            };
        }

        log::debug!("locate: {id} has no marker, flying to its stored position");
        view.fly_to(position, self.fallback_zoom);
        LocateOutcome::PositionOnly { position }
    }

    fn reveal(&self, view: &mut dyn MapView, marker: &PlacedMarker) {
        view.open_popup(marker);
        view.highlight(marker.handle, self.highlight);
    }
}
