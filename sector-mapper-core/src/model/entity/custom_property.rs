use serde::{Deserialize, Serialize};

/// free-form name/value attribute attached to an entity by the user or an import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomProperty {
    pub name: String,
    pub value: serde_json::Value,
}

impl CustomProperty {
    pub fn new(name: impl Into<String>, value: impl Into<serde_json::Value>) -> CustomProperty {
        CustomProperty {
            name: name.into(),
            value: value.into(),
        }
    }
}
