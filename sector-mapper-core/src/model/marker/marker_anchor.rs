use serde::{Deserialize, Serialize};

/// pixel offset, from the icon's top-left corner, of the point that sits on the coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerAnchor {
    pub x: f64,
    pub y: f64,
}

impl MarkerAnchor {
    pub fn center(size_px: u32) -> MarkerAnchor {
        let half = f64::from(size_px) / 2.0;
        MarkerAnchor { x: half, y: half }
    }

    pub fn bottom_center(size_px: u32) -> MarkerAnchor {
        MarkerAnchor {
            x: f64::from(size_px) / 2.0,
            y: f64::from(size_px),
        }
    }
}
