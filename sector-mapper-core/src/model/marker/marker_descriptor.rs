use super::{MarkerAnchor, ShapeOutline};
use crate::model::entity::IconShape;
use serde::{Deserialize, Serialize};

/// everything a renderer needs to draw one marker icon. carries no label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub shape: IconShape,
    pub outline: ShapeOutline,
    pub fill_color: String,
    pub size_px: u32,
    pub anchor: MarkerAnchor,
}
