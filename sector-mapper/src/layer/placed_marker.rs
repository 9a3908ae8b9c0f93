use super::{MarkerHandle, PopupContent};
use geo::Point;
use sector_mapper_core::model::{entity::EntityId, marker::MarkerDescriptor};

/// a marker living in one of the layers, tagged with the entity it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    pub handle: MarkerHandle,
    pub tag: EntityId,
    /// x = longitude, y = latitude
    pub position: Point<f64>,
    pub descriptor: MarkerDescriptor,
    pub popup: PopupContent,
}
