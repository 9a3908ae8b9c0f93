use super::{Entity, EntityCategory, EntityId, IconShape, Sector, ValidationError};
use crate::util::geo_utils;
use serde::{Deserialize, Serialize};

/// raw create/edit form input. nothing about it is trusted until
/// [`EntityDraft::validate`] has accepted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDraft {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: EntityCategory,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub sectors: Vec<Sector>,
    #[serde(default)]
    pub shape: Option<IconShape>,
    #[serde(default)]
    pub size: Option<u32>,
}

/// a draft that passed validation. it can only be produced by
/// [`EntityDraft::validate`], so holding one means the store may be mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft(EntityDraft);

impl EntityDraft {
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        category: EntityCategory,
    ) -> EntityDraft {
        EntityDraft {
            name: name.into(),
            latitude,
            longitude,
            category,
            color: None,
            description: None,
            group: None,
            sectors: vec![],
            shape: None,
            size: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> EntityDraft {
        self.color = Some(color.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> EntityDraft {
        self.description = Some(description.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> EntityDraft {
        self.group = Some(group.into());
        self
    }

    pub fn with_sectors(mut self, sectors: Vec<Sector>) -> EntityDraft {
        self.sectors = sectors;
        self
    }

    pub fn with_shape(mut self, shape: IconShape, size: u32) -> EntityDraft {
        self.shape = Some(shape);
        self.size = Some(size);
        self
    }

    pub fn validate(self) -> Result<ValidatedDraft, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if !geo_utils::is_valid_lat_lng(self.latitude, self.longitude) {
            return Err(ValidationError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if let Some(color) = self.color.as_deref().filter(|c| !c.is_empty()) {
            if !is_hex_color(color) {
                return Err(ValidationError::InvalidColor(color.to_string()));
            }
        }
        if let Some(size) = self.size {
            if size == 0 {
                return Err(ValidationError::InvalidIconSize(size));
            }
        }
        for (index, sector) in self.sectors.iter().enumerate() {
            sector
                .validate()
                .map_err(|reason| ValidationError::InvalidSector { index, reason })?;
        }
        Ok(ValidatedDraft(self))
    }
}

impl ValidatedDraft {
    pub fn name(&self) -> &str {
        self.0.name.trim()
    }

    pub fn category(&self) -> EntityCategory {
        self.0.category
    }

    /// builds a brand new entity under the given id.
    pub fn into_entity(self, id: EntityId) -> Entity {
        let name = self.name().to_string();
        let draft = self.0;
        let group = draft
            .group
            .filter(|g| !g.trim().is_empty())
            .or_else(|| Some(draft.category.default_group().to_string()));
        Entity {
            id,
            name,
            latitude: draft.latitude,
            longitude: draft.longitude,
            category: draft.category,
            group,
            description: draft.description.filter(|d| !d.trim().is_empty()),
            sectors: draft.sectors,
            icon_shape: draft.shape,
            icon_color: draft.color.filter(|c| !c.is_empty()),
            icon_size: draft.size,
            custom_properties: vec![],
        }
    }

    /// overwrites the editable fields of an existing entity. id, category and
    /// custom properties are preserved, as is the group unless the draft names one.
    pub fn apply_to(self, entity: &mut Entity) {
        let name = self.name().to_string();
        let draft = self.0;
        entity.name = name;
        entity.latitude = draft.latitude;
        entity.longitude = draft.longitude;
        entity.description = draft.description.filter(|d| !d.trim().is_empty());
        if let Some(group) = draft.group.filter(|g| !g.trim().is_empty()) {
            entity.group = Some(group);
        }
        if entity.category == EntityCategory::StructuredSite {
            entity.sectors = draft.sectors;
        }
        if draft.shape.is_some() {
            entity.icon_shape = draft.shape;
        }
        if let Some(color) = draft.color.filter(|c| !c.is_empty()) {
            entity.icon_color = Some(color);
        }
        if draft.size.is_some() {
            entity.icon_size = draft.size;
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
