/// where [`super::ClusterLayer::zoom_to_show_layer`] left the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomToShow {
    pub zoom: u8,
    /// the marker never separates from its neighbors, so it is shown at
    /// maximum zoom inside a spiderfied cluster
    pub spiderfied: bool,
}
