use super::{MarkerAnchor, MarkerDescriptor, ShapeOutline};
use crate::model::entity::Entity;

/// turns entities into marker descriptors.
///
/// building never fails: every missing or blank styling field falls back to
/// its default. coordinates are not inspected here; the layer manager decides
/// whether an entity can be placed at all. markers intentionally carry no name
/// label, which keeps large point sets legible.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerFactory;

impl MarkerFactory {
    pub fn build(entity: &Entity) -> MarkerDescriptor {
        MarkerFactory::build_with_color(entity, None)
    }

    /// as [`MarkerFactory::build`], with an optional fill color taking precedence
    /// over the entity's own color (used for thematic recoloring).
    pub fn build_with_color(entity: &Entity, color_override: Option<&str>) -> MarkerDescriptor {
        let shape = entity.icon_shape();
        let size_px = entity.icon_size();
        let fill_color = color_override
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| entity.icon_color())
            .to_string();
        let anchor = if shape.is_pin() {
            MarkerAnchor::bottom_center(size_px)
        } else {
            MarkerAnchor::center(size_px)
        };
        MarkerDescriptor {
            shape,
            outline: ShapeOutline::from(shape),
            fill_color,
            size_px,
            anchor,
        }
    }
}
