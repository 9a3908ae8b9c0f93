use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// marker icon shape. unrecognized names fall back to the default pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconShape {
    #[default]
    Default,
    Circle,
    Square,
    Triangle,
    Star,
    Diamond,
}

impl IconShape {
    /// the pin is the only shape whose tip, rather than its center, marks the coordinate.
    pub fn is_pin(&self) -> bool {
        matches!(self, IconShape::Default)
    }
}

impl From<&str> for IconShape {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "circle" => IconShape::Circle,
            "square" => IconShape::Square,
            "triangle" => IconShape::Triangle,
            "star" => IconShape::Star,
            "diamond" => IconShape::Diamond,
            _ => IconShape::Default,
        }
    }
}

impl From<String> for IconShape {
    fn from(value: String) -> Self {
        IconShape::from(value.as_str())
    }
}

impl From<IconShape> for String {
    fn from(value: IconShape) -> Self {
        value.to_string()
    }
}

impl Display for IconShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IconShape::Default => "default",
            IconShape::Circle => "circle",
            IconShape::Square => "square",
            IconShape::Triangle => "triangle",
            IconShape::Star => "star",
            IconShape::Diamond => "diamond",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_is_default() {
        let shape: IconShape = serde_json::from_str("\"3d-cube\"").unwrap();
        assert_eq!(shape, IconShape::Default);
        let shape: IconShape = serde_json::from_str("\"Star\"").unwrap();
        assert_eq!(shape, IconShape::Star);
    }
}
