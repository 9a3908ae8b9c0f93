mod cluster_child;
mod cluster_layer;
mod flat_layer;
mod layer_manager;
mod marker_handle;
mod marker_set;
mod placed_marker;
mod popup_content;
mod rebuild_summary;
mod zoom_to_show;

pub mod web_mercator;

pub use cluster_child::{ClusterChild, ClusterNode};
pub use cluster_layer::ClusterLayer;
pub use flat_layer::FlatLayer;
pub use layer_manager::LayerManager;
pub use marker_handle::MarkerHandle;
pub use marker_set::MarkerSet;
pub use placed_marker::PlacedMarker;
pub use popup_content::PopupContent;
pub use rebuild_summary::RebuildSummary;
pub use zoom_to_show::ZoomToShow;
