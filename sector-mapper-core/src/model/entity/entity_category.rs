use super::LayerKind;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// kind of map entity. the category decides which marker layer the entity
/// is rendered into and which placeholder group it falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    /// a site with sector sub-records, rendered in the clustering layer
    #[serde(alias = "site")]
    StructuredSite,
    /// a point entered by hand
    #[serde(alias = "manual")]
    ManualPoint,
    /// a point brought in by bulk import
    #[serde(alias = "kml_point")]
    ImportedPoint,
}

impl EntityCategory {
    pub fn layer_kind(&self) -> LayerKind {
        match self {
            EntityCategory::StructuredSite => LayerKind::Clustered,
            EntityCategory::ManualPoint | EntityCategory::ImportedPoint => LayerKind::Flat,
        }
    }

    /// group label used when an entity carries no group of its own.
    pub fn default_group(&self) -> &'static str {
        match self {
            EntityCategory::StructuredSite => "Other",
            EntityCategory::ManualPoint => "Manual",
            EntityCategory::ImportedPoint => "Unknown KML",
        }
    }
}

impl Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityCategory::StructuredSite => write!(f, "structured_site"),
            EntityCategory::ManualPoint => write!(f, "manual_point"),
            EntityCategory::ImportedPoint => write!(f, "imported_point"),
        }
    }
}

impl FromStr for EntityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured_site" | "site" => Ok(EntityCategory::StructuredSite),
            "manual_point" | "manual" => Ok(EntityCategory::ManualPoint),
            "imported_point" | "kml_point" => Ok(EntityCategory::ImportedPoint),
            other => Err(format!("unknown entity category '{other}'")),
        }
    }
}
