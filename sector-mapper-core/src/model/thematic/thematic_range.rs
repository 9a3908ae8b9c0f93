use serde::{Deserialize, Serialize};

/// one class of a numerical rule. bounds are inclusive; a missing bound is
/// unbounded on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub color: String,
    pub label: String,
    #[serde(default)]
    pub count: usize,
}

impl ThematicRange {
    pub fn new(min: Option<f64>, max: Option<f64>, color: &str, label: impl Into<String>) -> Self {
        ThematicRange {
            min,
            max,
            color: color.to_string(),
            label: label.into(),
            count: 0,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive() {
        let r = ThematicRange::new(Some(-110.0), Some(-100.0), "#eab308", "Fair");
        assert!(r.contains(-110.0));
        assert!(r.contains(-100.0));
        assert!(!r.contains(-99.9));
        let open = ThematicRange::new(None, Some(0.0), "#ef4444", "Poor");
        assert!(open.contains(-1e9));
        assert!(!open.contains(f64::NAN));
    }
}
