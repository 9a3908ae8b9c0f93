use super::ThematicRange;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// how attribute values map to colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThematicRule {
    /// one color per distinct value, in sorted value order
    Categorical { mapping: IndexMap<String, String> },
    /// first range containing the numeric value wins
    Numerical { ranges: Vec<ThematicRange> },
}

impl ThematicRule {
    pub fn color_of(&self, value: &str) -> Option<&str> {
        match self {
            ThematicRule::Categorical { mapping } => mapping.get(value).map(String::as_str),
            ThematicRule::Numerical { ranges } => {
                let number = super::parse_number(value)?;
                ranges
                    .iter()
                    .find(|r| r.contains(number))
                    .map(|r| r.color.as_str())
            }
        }
    }
}
