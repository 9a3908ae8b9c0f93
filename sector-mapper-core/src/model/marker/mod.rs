mod marker_anchor;
mod marker_descriptor;
mod marker_factory;
mod shape_outline;

pub use marker_anchor::MarkerAnchor;
pub use marker_descriptor::MarkerDescriptor;
pub use marker_factory::MarkerFactory;
pub use shape_outline::{ShapeOutline, OUTLINE_VIEW_BOX};
