use super::{MarkerHandle, PlacedMarker, PopupContent};
use geo::Point;
use sector_mapper_core::model::{
    entity::{EntityId, LayerKind},
    marker::MarkerDescriptor,
};
use std::collections::HashMap;

/// insertion-ordered markers of one layer plus the tag index built as they are added.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSet {
    layer: LayerKind,
    markers: Vec<PlacedMarker>,
    by_tag: HashMap<EntityId, MarkerHandle>,
}

impl MarkerSet {
    pub fn new(layer: LayerKind) -> MarkerSet {
        MarkerSet {
            layer,
            markers: vec![],
            by_tag: HashMap::new(),
        }
    }

    pub fn layer(&self) -> LayerKind {
        self.layer
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.by_tag.clear();
    }

    /// places a marker and records its tag. a repeated tag keeps the first marker
    /// in the index; the entity store never hands out repeated ids.
    pub fn add(
        &mut self,
        tag: EntityId,
        position: Point<f64>,
        descriptor: MarkerDescriptor,
        popup: PopupContent,
    ) -> MarkerHandle {
        let handle = MarkerHandle::new(self.layer, self.markers.len());
        if self.by_tag.contains_key(&tag) {
            log::warn!("{} layer already holds a marker tagged {tag}", self.layer);
        } else {
            self.by_tag.insert(tag.clone(), handle);
        }
        self.markers.push(PlacedMarker {
            handle,
            tag,
            position,
            descriptor,
            popup,
        });
        handle
    }

    pub fn get(&self, handle: MarkerHandle) -> Option<&PlacedMarker> {
        if handle.layer != self.layer {
            return None;
        }
        self.markers.get(handle.index)
    }

    pub fn find_by_tag(&self, tag: &EntityId) -> Option<&PlacedMarker> {
        self.by_tag.get(tag).and_then(|h| self.get(*h))
    }

    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
