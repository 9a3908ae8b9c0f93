use crate::model::entity::Entity;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

const CUSTOM_PREFIX: &str = "custom:";

/// the entity value a thematic rule is keyed on. written `custom:<name>` for a
/// custom property, or a bare field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThematicAttribute {
    Field(String),
    Custom(String),
}

impl ThematicAttribute {
    /// the attribute name without the custom prefix.
    pub fn name(&self) -> &str {
        match self {
            ThematicAttribute::Field(name) => name,
            ThematicAttribute::Custom(name) => name,
        }
    }

    /// reads the attribute from an entity as text. absent, null and blank
    /// values read as `None`.
    ///
    /// field names other than name, group, description and type are looked up
    /// among the custom properties, where imported attributes usually live.
    pub fn value_of(&self, entity: &Entity) -> Option<String> {
        let value = match self {
            ThematicAttribute::Custom(name) => custom_value(entity, name),
            ThematicAttribute::Field(name) => match name.to_lowercase().as_str() {
                "name" => Some(entity.name.clone()),
                "group" => entity.group.clone(),
                "description" => entity.description.clone(),
                "type" | "category" => Some(entity.category.to_string()),
                _ => custom_value(entity, name),
            },
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

fn custom_value(entity: &Entity, name: &str) -> Option<String> {
    let property = entity.custom_properties.iter().find(|p| p.name == name)?;
    match &property.value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl Display for ThematicAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThematicAttribute::Field(name) => write!(f, "{name}"),
            ThematicAttribute::Custom(name) => write!(f, "{CUSTOM_PREFIX}{name}"),
        }
    }
}

impl FromStr for ThematicAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let attribute = match s.strip_prefix(CUSTOM_PREFIX) {
            Some(name) => ThematicAttribute::Custom(name.trim().to_string()),
            None => ThematicAttribute::Field(s.to_string()),
        };
        if attribute.name().is_empty() {
            return Err(format!("empty thematic attribute '{s}'"));
        }
        Ok(attribute)
    }
}

impl TryFrom<String> for ThematicAttribute {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThematicAttribute> for String {
    fn from(value: ThematicAttribute) -> Self {
        value.to_string()
    }
}
