use super::{MapView, ViewEvent};
use crate::layer::{web_mercator, MarkerHandle, PlacedMarker};
use geo::{Point, Rect};
use sector_mapper_core::model::entity::EntityId;
use std::time::Duration;

/// map view without a renderer. it tracks center and zoom, records every change
/// as a [`ViewEvent`] and runs highlight expiry on a logical clock that only
/// moves when [`HeadlessMapView::advance`] is called.
#[derive(Debug, Clone)]
pub struct HeadlessMapView {
    center: Point<f64>,
    zoom: u8,
    max_zoom: u8,
    width_px: u32,
    height_px: u32,
    clock: Duration,
    highlights: Vec<(MarkerHandle, Duration)>,
    open_popup: Option<EntityId>,
    events: Vec<ViewEvent>,
}

impl Default for HeadlessMapView {
    fn default() -> Self {
        HeadlessMapView::new(Point::new(-7.5898, 33.5731), 6, 19, 1280, 800)
    }
}

impl HeadlessMapView {
    pub fn new(
        center: Point<f64>,
        zoom: u8,
        max_zoom: u8,
        width_px: u32,
        height_px: u32,
    ) -> HeadlessMapView {
        HeadlessMapView {
            center,
            zoom: zoom.min(max_zoom),
            max_zoom,
            width_px,
            height_px,
            clock: Duration::ZERO,
            highlights: vec![],
            open_popup: None,
            events: vec![],
        }
    }

    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// returns and forgets the recorded events.
    pub fn take_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// tag of the marker whose popup is open, if any.
    pub fn open_popup_tag(&self) -> Option<&EntityId> {
        self.open_popup.as_ref()
    }

    pub fn active_highlights(&self) -> Vec<MarkerHandle> {
        self.highlights.iter().map(|(h, _)| *h).collect()
    }

    /// moves the logical clock forward, removing highlights that have expired.
    pub fn advance(&mut self, elapsed: Duration) {
        self.clock += elapsed;
        let now = self.clock;
        let (expired, active): (Vec<_>, Vec<_>) = self
            .highlights
            .drain(..)
            .partition(|(_, expires_at)| *expires_at <= now);
        self.highlights = active;
        for (handle, _) in expired {
            self.events.push(ViewEvent::HighlightRemoved { handle });
        }
    }

    /// largest zoom at which `bounds` fits inside the viewport minus padding.
    fn bounds_zoom(&self, bounds: &Rect<f64>, padding_px: u32) -> u8 {
        let avail_w = f64::from(self.width_px.saturating_sub(2 * padding_px).max(1));
        let avail_h = f64::from(self.height_px.saturating_sub(2 * padding_px).max(1));
        let south_west = Point::new(bounds.min().x, bounds.min().y);
        let north_east = Point::new(bounds.max().x, bounds.max().y);
        (0..=self.max_zoom)
            .rev()
            .find(|z| {
                let [x0, y0] = web_mercator::project(&south_west, *z);
                let [x1, y1] = web_mercator::project(&north_east, *z);
                (x1 - x0).abs() <= avail_w && (y1 - y0).abs() <= avail_h
            })
            .unwrap_or(0)
    }
}

impl MapView for HeadlessMapView {
    fn center(&self) -> Point<f64> {
        self.center
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn set_view(&mut self, center: Point<f64>, zoom: u8) {
        self.center = center;
        self.zoom = zoom.min(self.max_zoom);
        self.events.push(ViewEvent::SetView {
            center,
            zoom: self.zoom,
        });
    }

    fn fly_to(&mut self, center: Point<f64>, zoom: u8) {
        self.center = center;
        self.zoom = zoom.min(self.max_zoom);
        self.events.push(ViewEvent::FlyTo {
            center,
            zoom: self.zoom,
        });
    }

    fn open_popup(&mut self, marker: &PlacedMarker) {
        self.open_popup = Some(marker.tag.clone());
        self.events.push(ViewEvent::PopupOpened {
            handle: marker.handle,
            tag: marker.tag.clone(),
        });
    }

    fn highlight(&mut self, handle: MarkerHandle, duration: Duration) {
        let expires_at = self.clock + duration;
        self.highlights.retain(|(h, _)| *h != handle);
        self.highlights.push((handle, expires_at));
        self.events
            .push(ViewEvent::HighlightApplied { handle, duration });
    }

    fn fit_bounds(&mut self, bounds: Rect<f64>, padding_px: u32) {
        let zoom = self.bounds_zoom(&bounds, padding_px);
        let center = bounds.center();
        self.center = Point::new(center.x, center.y);
        self.zoom = zoom;
        self.events.push(ViewEvent::FitBounds { bounds, zoom });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;
    use sector_mapper_core::model::entity::LayerKind;

    #[test]
    fn test_highlight_expires_on_clock() {
        let mut view = HeadlessMapView::default();
        let handle = MarkerHandle::new(LayerKind::Flat, 0);
        view.highlight(handle, Duration::from_secs(2));
        view.advance(Duration::from_millis(1999));
        assert_eq!(view.active_highlights(), vec![handle]);
        view.advance(Duration::from_millis(1));
        assert!(view.active_highlights().is_empty());
        assert_eq!(
            view.events().last(),
            Some(&ViewEvent::HighlightRemoved { handle })
        );
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut view = HeadlessMapView::default();
        view.set_view(Point::new(0.0, 0.0), 25);
        assert_eq!(view.zoom(), 19);
    }

    #[test]
    fn test_fit_bounds_single_point_uses_max_zoom() {
        let mut view = HeadlessMapView::default();
        let p = coord! { x: -74.0, y: 40.0 };
        view.fit_bounds(Rect::new(p, p), 50);
        assert_eq!(view.zoom(), 19);
        assert_eq!(view.center(), Point::new(-74.0, 40.0));
    }

    #[test]
    fn test_fit_bounds_wide_extent() {
        let mut view = HeadlessMapView::default();
        let rect = Rect::new(coord! { x: -10.0, y: 30.0 }, coord! { x: 10.0, y: 40.0 });
        view.fit_bounds(rect, 50);
        // 20 degrees of longitude is ~910px at zoom 6 and ~1820px at zoom 7
        assert_eq!(view.zoom(), 6);
        assert_eq!(view.center(), Point::new(0.0, 35.0));
    }
}
