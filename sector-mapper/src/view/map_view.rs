use crate::layer::{MarkerHandle, PlacedMarker};
use geo::{Point, Rect};
use std::time::Duration;

/// the interactive map the layers are drawn on.
///
/// view changes may animate; an implementation returns as soon as the change
/// is issued. a new change issued mid-animation simply replaces the previous
/// target, nothing is cancelled or queued.
pub trait MapView {
    fn center(&self) -> Point<f64>;

    fn zoom(&self) -> u8;

    /// centers the view on `center` at `zoom` without a flight animation.
    fn set_view(&mut self, center: Point<f64>, zoom: u8);

    /// animated flight to `center` at `zoom`.
    fn fly_to(&mut self, center: Point<f64>, zoom: u8);

    fn open_popup(&mut self, marker: &PlacedMarker);

    /// applies the highlight style to a marker, removing it again after `duration`.
    fn highlight(&mut self, handle: MarkerHandle, duration: Duration);

    /// frames `bounds` with `padding_px` of margin on every side.
    fn fit_bounds(&mut self, bounds: Rect<f64>, padding_px: u32);
}
