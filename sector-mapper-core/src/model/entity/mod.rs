mod custom_property;
mod entity_category;
mod entity_draft;
mod entity_error;
mod entity_id;
mod icon_shape;
mod layer_kind;
mod map_entity;
mod sector;
mod validation_error;

pub use custom_property::CustomProperty;
pub use entity_category::EntityCategory;
pub use entity_draft::{EntityDraft, ValidatedDraft};
pub use entity_error::EntityError;
pub use entity_id::EntityId;
pub use icon_shape::IconShape;
pub use layer_kind::LayerKind;
pub use map_entity::{Entity, DEFAULT_ICON_COLOR, DEFAULT_ICON_SIZE};
pub use sector::Sector;
pub use validation_error::ValidationError;
