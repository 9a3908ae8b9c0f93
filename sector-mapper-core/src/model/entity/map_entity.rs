use super::{CustomProperty, EntityCategory, EntityError, EntityId, IconShape, LayerKind, Sector};
use crate::util::geo_utils;
use geo::Point;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_ICON_COLOR: &str = "#3b82f6";
pub const DEFAULT_ICON_SIZE: u32 = 30;

/// a site or point shown on the map.
///
/// sites and points share one representation; `category` decides which
/// marker layer the entity lands in. styling fields are optional and fall
/// back to defaults through the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    #[serde(default = "missing_coordinate", deserialize_with = "deserialize_coordinate")]
    pub latitude: f64,
    #[serde(default = "missing_coordinate", deserialize_with = "deserialize_coordinate")]
    pub longitude: f64,
    #[serde(rename = "type")]
    pub category: EntityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<Sector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_shape: Option<IconShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_properties: Vec<CustomProperty>,
}

impl Entity {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        category: EntityCategory,
    ) -> Entity {
        Entity {
            id,
            name: name.into(),
            latitude,
            longitude,
            category,
            group: None,
            description: None,
            sectors: vec![],
            icon_shape: None,
            icon_color: None,
            icon_size: None,
            custom_properties: vec![],
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Entity {
        self.group = Some(group.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Entity {
        self.description = Some(description.into());
        self
    }

    pub fn with_sectors(mut self, sectors: Vec<Sector>) -> Entity {
        self.sectors = sectors;
        self
    }

    pub fn with_icon(mut self, shape: IconShape, color: impl Into<String>, size: u32) -> Entity {
        self.icon_shape = Some(shape);
        self.icon_color = Some(color.into());
        self.icon_size = Some(size);
        self
    }

    pub fn with_custom_property(mut self, property: CustomProperty) -> Entity {
        self.custom_properties.push(property);
        self
    }

    pub fn layer_kind(&self) -> LayerKind {
        self.category.layer_kind()
    }

    /// the entity's group label, or the category placeholder when absent or blank.
    pub fn group_name(&self) -> &str {
        self.group
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| self.category.default_group())
    }

    pub fn icon_shape(&self) -> IconShape {
        self.icon_shape.unwrap_or_default()
    }

    pub fn icon_color(&self) -> &str {
        self.icon_color
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_ICON_COLOR)
    }

    pub fn icon_size(&self) -> u32 {
        match self.icon_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_ICON_SIZE,
        }
    }

    /// the entity position as a lon/lat point, if the stored coordinates are usable.
    pub fn try_position(&self) -> Result<Point<f64>, EntityError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(EntityError::NonFiniteCoordinate {
                id: self.id.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !geo_utils::is_valid_lat_lng(self.latitude, self.longitude) {
            return Err(EntityError::CoordinateOutOfRange {
                id: self.id.clone(),
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        Ok(Point::new(self.longitude, self.latitude))
    }
}

fn missing_coordinate() -> f64 {
    f64::NAN
}

/// accepts numbers, numeric strings and null. anything that cannot be read as a
/// number, or an absent key, becomes NaN so that a single bad record does not
/// fail a whole load; such entities are skipped at marker placement instead.
fn deserialize_coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let coordinate = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().replace(',', ".").parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    };
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let e = Entity::new(
            EntityId::new("a"),
            "alpha",
            40.0,
            -74.0,
            EntityCategory::ImportedPoint,
        );
        assert_eq!(e.group_name(), "Unknown KML");
        assert_eq!(e.icon_shape(), IconShape::Default);
        assert_eq!(e.icon_color(), "#3b82f6");
        assert_eq!(e.icon_size(), 30);
        let e = e.with_group("  ");
        assert_eq!(e.group_name(), "Unknown KML");
    }

    #[test]
    fn test_position() {
        let e = Entity::new(
            EntityId::new("a"),
            "alpha",
            40.0,
            -74.0,
            EntityCategory::ManualPoint,
        );
        let p = e.try_position().unwrap();
        assert_eq!(p.x(), -74.0);
        assert_eq!(p.y(), 40.0);

        let mut bad = e.clone();
        bad.latitude = f64::NAN;
        assert!(matches!(
            bad.try_position(),
            Err(EntityError::NonFiniteCoordinate { .. })
        ));
        bad.latitude = 91.0;
        assert!(matches!(
            bad.try_position(),
            Err(EntityError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_tolerates_bad_coordinates() {
        let input = json!([
            { "id": "s1", "name": "site", "latitude": "40.5", "longitude": -74.0, "type": "structured_site",
              "sectors": [{ "azimuth": 0.0, "beamwidth": 65.0, "range": 500.0, "technology": "4G" }] },
            { "id": "p1", "name": "point", "latitude": null, "longitude": -74.0, "type": "kml_point", "group": "a.kml" }
        ]);
        let entities: Vec<Entity> = serde_json::from_value(input).unwrap();
        assert_eq!(entities[0].latitude, 40.5);
        assert_eq!(entities[0].sectors.len(), 1);
        assert!(entities[1].latitude.is_nan());
        assert_eq!(entities[1].category, EntityCategory::ImportedPoint);
        assert_eq!(entities[1].group_name(), "a.kml");
    }

    #[test]
    fn test_deserialize_tolerates_missing_coordinates() {
        let input = json!([
            { "id": "p1", "name": "ok", "latitude": 40.0, "longitude": -74.0, "type": "manual_point" },
            { "id": "p2", "name": "no latitude", "longitude": -74.0, "type": "manual_point" },
            { "id": "p3", "name": "no position", "type": "kml_point" }
        ]);
        let entities: Vec<Entity> = serde_json::from_value(input).unwrap();
        assert_eq!(entities.len(), 3);
        assert!(entities[0].try_position().is_ok());
        assert!(entities[1].latitude.is_nan());
        assert_eq!(entities[1].longitude, -74.0);
        assert!(entities[2].latitude.is_nan() && entities[2].longitude.is_nan());
        assert!(matches!(
            entities[1].try_position(),
            Err(EntityError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_serialized_keys() {
        let e = Entity::new(
            EntityId::new("a"),
            "alpha",
            1.0,
            2.0,
            EntityCategory::ManualPoint,
        )
        .with_icon(IconShape::Star, "#ff0000", 24);
        let value = serde_json::to_value(&e).unwrap();
        assert_eq!(value["type"], "manual_point");
        assert_eq!(value["iconShape"], "star");
        assert_eq!(value["iconColor"], "#ff0000");
        assert!(value.get("sectors").is_none());
    }
}
