use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// number of random base-36 characters appended to the timestamp of a generated id.
const RANDOM_SUFFIX_LEN: usize = 11;

/// opaque identifier of a map entity, stable for the lifetime of the entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> EntityId {
        EntityId(id.into())
    }

    /// generates a new id from the current time in milliseconds (base 36)
    /// followed by random base-36 characters.
    pub fn generate() -> EntityId {
        let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let mut rng = rand::rng();
        let suffix: String = (0..RANDOM_SUFFIX_LEN)
            .filter_map(|_| std::char::from_digit(rng.random_range(0..36), 36))
            .collect();
        EntityId(format!("{}{}", to_base36(millis), suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId(value)
    }
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }
    let mut digits = vec![];
    while value > 0 {
        let digit = (value % 36) as u32;
        if let Some(c) = std::char::from_digit(digit, 36) {
            digits.push(c);
        }
        value /= 36;
    }
    digits.iter().rev().collect()
}
