use sector_mapper_core::model::entity::{Entity, EntityId};

/// one row of the list panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: EntityId,
    pub name: String,
    /// "lat, lng" with five decimals
    pub coordinates: String,
    pub color: String,
}

impl From<&Entity> for ListItem {
    fn from(entity: &Entity) -> Self {
        ListItem {
            id: entity.id.clone(),
            name: entity.name.clone(),
            coordinates: format!("{:.5}, {:.5}", entity.latitude, entity.longitude),
            color: entity.icon_color().to_string(),
        }
    }
}
