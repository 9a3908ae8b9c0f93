use super::MapView;
use crate::layer::{MarkerHandle, PlacedMarker};
use geo::{Point, Rect};
use std::time::Duration;

/// wraps another view and logs every change passed through to it.
#[derive(Debug, Clone)]
pub struct LoggingMapView<V> {
    inner: V,
}

impl<V: MapView> LoggingMapView<V> {
    pub fn new(inner: V) -> LoggingMapView<V> {
        LoggingMapView { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V: MapView> MapView for LoggingMapView<V> {
    fn center(&self) -> Point<f64> {
        self.inner.center()
    }

    fn zoom(&self) -> u8 {
        self.inner.zoom()
    }

    fn set_view(&mut self, center: Point<f64>, zoom: u8) {
        log::info!(
            "set view to ({:.6}, {:.6}) at zoom {zoom}",
            center.y(),
            center.x()
        );
        self.inner.set_view(center, zoom);
    }

    fn fly_to(&mut self, center: Point<f64>, zoom: u8) {
        log::info!(
            "flying to ({:.6}, {:.6}) at zoom {zoom}",
            center.y(),
            center.x()
        );
        self.inner.fly_to(center, zoom);
    }

    fn open_popup(&mut self, marker: &PlacedMarker) {
        log::info!(
            "opening popup of {} '{}' ({})",
            marker.tag,
            marker.popup.title,
            marker.popup.coordinates
        );
        self.inner.open_popup(marker);
    }

    fn highlight(&mut self, handle: MarkerHandle, duration: Duration) {
        log::debug!("highlighting marker {handle} for {duration:?}");
        self.inner.highlight(handle, duration);
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, padding_px: u32) {
        log::info!(
            "fitting bounds ({:.6}, {:.6}) - ({:.6}, {:.6})",
            bounds.min().y,
            bounds.min().x,
            bounds.max().y,
            bounds.max().x
        );
        self.inner.fit_bounds(bounds, padding_px);
    }
}
