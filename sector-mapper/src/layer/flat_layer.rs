use super::{MarkerHandle, MarkerSet, PlacedMarker, PopupContent};
use geo::Point;
use sector_mapper_core::model::{
    entity::{EntityId, LayerKind},
    marker::MarkerDescriptor,
};

/// marker container without any grouping: one visible marker per entity at every zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatLayer {
    markers: MarkerSet,
}

impl Default for FlatLayer {
    fn default() -> Self {
        FlatLayer {
            markers: MarkerSet::new(LayerKind::Flat),
        }
    }
}

impl FlatLayer {
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn add(
        &mut self,
        tag: EntityId,
        position: Point<f64>,
        descriptor: MarkerDescriptor,
        popup: PopupContent,
    ) -> MarkerHandle {
        self.markers.add(tag, position, descriptor, popup)
    }

    pub fn get(&self, handle: MarkerHandle) -> Option<&PlacedMarker> {
        self.markers.get(handle)
    }

    pub fn find_by_tag(&self, tag: &EntityId) -> Option<&PlacedMarker> {
        self.markers.find_by_tag(tag)
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        self.markers.markers()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
