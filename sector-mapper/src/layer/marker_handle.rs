use sector_mapper_core::model::entity::LayerKind;
use std::fmt::Display;

/// reference to a live marker: the layer holding it and its slot in that layer.
/// handles are reissued on every rebuild and must not be kept across one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle {
    pub layer: LayerKind,
    pub index: usize,
}

impl MarkerHandle {
    pub fn new(layer: LayerKind, index: usize) -> MarkerHandle {
        MarkerHandle { layer, index }
    }
}

impl Display for MarkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.layer, self.index)
    }
}
