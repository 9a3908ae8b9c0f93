use crate::layer::MarkerHandle;
use geo::{Point, Rect};
use sector_mapper_core::model::entity::EntityId;
use std::time::Duration;

/// a change applied to a [`super::HeadlessMapView`], in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SetView { center: Point<f64>, zoom: u8 },
    FlyTo { center: Point<f64>, zoom: u8 },
    PopupOpened { handle: MarkerHandle, tag: EntityId },
    HighlightApplied { handle: MarkerHandle, duration: Duration },
    HighlightRemoved { handle: MarkerHandle },
    FitBounds { bounds: Rect<f64>, zoom: u8 },
}
