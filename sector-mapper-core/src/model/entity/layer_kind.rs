use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// the marker container an entity is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// grouped spatially at low zoom, expanded at high zoom
    Clustered,
    /// one marker per entity, never grouped
    Flat,
}

impl Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Clustered => write!(f, "clustered"),
            LayerKind::Flat => write!(f, "flat"),
        }
    }
}

impl FromStr for LayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clustered" | "sites" => Ok(LayerKind::Clustered),
            "flat" | "points" => Ok(LayerKind::Flat),
            other => Err(format!("unknown layer kind '{other}'")),
        }
    }
}
