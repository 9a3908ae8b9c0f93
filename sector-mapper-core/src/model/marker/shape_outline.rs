use crate::model::entity::IconShape;
use serde::{Deserialize, Serialize};

/// all outlines are drawn in a 24x24 view box and scaled to the icon size.
pub const OUTLINE_VIEW_BOX: (f64, f64, f64, f64) = (0.0, 0.0, 24.0, 24.0);

const PIN_PATH: &str = "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z";
const TRIANGLE_PATH: &str = "M12 2L2 22h20L12 2z";
const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";
const DIAMOND_PATH: &str = "M12 2L2 12l10 10 10-10L12 2z";

/// vector outline of a marker icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ShapeOutline {
    Path {
        d: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
    },
}

impl From<IconShape> for ShapeOutline {
    fn from(shape: IconShape) -> Self {
        match shape {
            IconShape::Default => ShapeOutline::Path {
                d: PIN_PATH.to_string(),
            },
            IconShape::Circle => ShapeOutline::Circle {
                cx: 12.0,
                cy: 12.0,
                r: 10.0,
            },
            IconShape::Square => ShapeOutline::Rect {
                x: 4.0,
                y: 4.0,
                width: 16.0,
                height: 16.0,
                rx: 2.0,
            },
            IconShape::Triangle => ShapeOutline::Path {
                d: TRIANGLE_PATH.to_string(),
            },
            IconShape::Star => ShapeOutline::Path {
                d: STAR_PATH.to_string(),
            },
            IconShape::Diamond => ShapeOutline::Path {
                d: DIAMOND_PATH.to_string(),
            },
        }
    }
}
