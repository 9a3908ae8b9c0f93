mod headless_map_view;
mod logging_map_view;
mod map_view;
mod view_event;

pub use headless_map_view::HeadlessMapView;
pub use logging_map_view::LoggingMapView;
pub use map_view::MapView;
pub use view_event::ViewEvent;
