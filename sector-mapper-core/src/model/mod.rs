pub mod entity;
pub mod marker;
pub mod thematic;
