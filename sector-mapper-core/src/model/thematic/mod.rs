mod thematic_attribute;
mod thematic_range;
mod thematic_rule;
mod thematic_settings;

pub use thematic_attribute::ThematicAttribute;
pub use thematic_range::ThematicRange;
pub use thematic_rule::ThematicRule;
pub use thematic_settings::{parse_number, ThematicSettings, UNMATCHED_COLOR};
