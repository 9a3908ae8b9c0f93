use sector_mapper_core::model::entity::{Entity, EntityCategory};

/// text shown when a marker's popup opens.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    /// "lat, lng" with six decimals
    pub coordinates: String,
    pub description: Option<String>,
    /// only reported for structured sites
    pub sector_count: Option<usize>,
}

impl From<&Entity> for PopupContent {
    fn from(entity: &Entity) -> Self {
        let sector_count = match entity.category {
            EntityCategory::StructuredSite => Some(entity.sectors.len()),
            _ => None,
        };
        PopupContent {
            title: entity.name.clone(),
            coordinates: format!("{:.6}, {:.6}", entity.latitude, entity.longitude),
            description: entity.description.clone().filter(|d| !d.is_empty()),
            sector_count,
        }
    }
}
