use super::MarkerHandle;
use geo::Point;

/// a direct child of the clustering layer at some zoom level.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterChild {
    /// several markers collapsed into one synthetic node
    Cluster(ClusterNode),
    /// a marker standing on its own
    Marker(MarkerHandle),
}

/// synthetic node standing in for two or more markers that are too close
/// together on screen at the current zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterNode {
    /// mean position of the leaves
    pub position: Point<f64>,
    leaves: Vec<MarkerHandle>,
}

impl ClusterNode {
    pub fn new(position: Point<f64>, leaves: Vec<MarkerHandle>) -> ClusterNode {
        ClusterNode { position, leaves }
    }

    /// every marker hidden behind this node.
    pub fn leaves(&self) -> &[MarkerHandle] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }
}
