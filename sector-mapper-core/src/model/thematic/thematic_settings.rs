use super::{ThematicAttribute, ThematicRange, ThematicRule};
use crate::model::entity::{Entity, EntityCategory};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// fill color of a themed marker whose value is missing or matches no class.
pub const UNMATCHED_COLOR: &str = "#999999";

const CATEGORICAL_PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#6366f1", "#14b8a6",
];
const EQUAL_INTERVAL_RAMP: [&str; 5] = ["#fee2e2", "#fca5a5", "#f87171", "#ef4444", "#b91c1c"];
const POOR: &str = "#ef4444";
const FAIR: &str = "#eab308";
const EXCELLENT: &str = "#22c55e";

/// a value set with at most this many distinct values is treated as categories.
const MAX_CATEGORIES_FOR_NUMBERS: usize = 5;

const CATEGORICAL_ATTRIBUTES: [&str; 8] = [
    "technology",
    "name",
    "group",
    "sc physical cell id",
    "physical cell id",
    "pci",
    "cell name",
    "cell_name",
];
const MEASUREMENT_ATTRIBUTES: [&str; 7] =
    ["throughput", "couverture", "rsrp", "rxlev", "rscp", "sinr", "rsrq"];

/// attribute-driven recoloring of imported point markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThematicSettings {
    pub attribute: ThematicAttribute,
    pub rule: ThematicRule,
    /// number of entities that carried a value
    pub total: usize,
    /// entities per distinct value, in sorted value order
    pub counts: IndexMap<String, usize>,
}

impl ThematicSettings {
    /// entities whose marker color is driven by the theme.
    pub fn applies_to(entity: &Entity) -> bool {
        entity.category == EntityCategory::ImportedPoint
    }

    /// classifies the values of `attribute` across the themed entities.
    ///
    /// # Returns
    ///
    /// `None` when no themed entity carries a value for the attribute
    pub fn generate<'a>(
        attribute: ThematicAttribute,
        entities: impl IntoIterator<Item = &'a Entity>,
    ) -> Option<ThematicSettings> {
        let values = entities
            .into_iter()
            .filter(|e| ThematicSettings::applies_to(e))
            .filter_map(|e| attribute.value_of(e))
            .collect_vec();
        if values.is_empty() {
            return None;
        }
        let counts: IndexMap<String, usize> = values
            .iter()
            .cloned()
            .counts()
            .into_iter()
            .sorted()
            .collect();

        let key = attribute.name().to_lowercase();
        let all_numbers = values.iter().all(|v| parse_number(v).is_some());
        let mut numerical = all_numbers && counts.len() > MAX_CATEGORIES_FOR_NUMBERS;
        if CATEGORICAL_ATTRIBUTES.contains(&key.as_str()) {
            numerical = false;
        }
        if MEASUREMENT_ATTRIBUTES.iter().any(|m| key.contains(m)) {
            numerical = true;
        }
        // carrier numbers read better as distinct categories
        if key.contains("earfcn") {
            numerical = false;
        }

        let rule = if numerical {
            let numbers = values.iter().filter_map(|v| parse_number(v)).collect_vec();
            let mut ranges = preset_ranges(&key).unwrap_or_else(|| equal_interval(&numbers));
            for n in numbers {
                if let Some(range) = ranges.iter_mut().find(|r| r.contains(n)) {
                    range.count += 1;
                }
            }
            ThematicRule::Numerical { ranges }
        } else {
            let mapping = counts
                .keys()
                .zip(CATEGORICAL_PALETTE.iter().cycle())
                .map(|(value, color)| (value.clone(), color.to_string()))
                .collect();
            ThematicRule::Categorical { mapping }
        };
        log::debug!(
            "thematic settings for '{attribute}': {} values, {} distinct",
            values.len(),
            counts.len()
        );
        Some(ThematicSettings {
            attribute,
            rule,
            total: values.len(),
            counts,
        })
    }

    /// fill color for an entity under this theme.
    pub fn color_for(&self, entity: &Entity) -> &str {
        self.attribute
            .value_of(entity)
            .and_then(|v| self.rule.color_of(&v))
            .unwrap_or(UNMATCHED_COLOR)
    }
}

/// lenient number parsing for attribute values: several dots are read as
/// thousands separators, a lone comma as the decimal separator.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let cleaned = if trimmed.matches('.').count() > 1 {
        trimmed.replace('.', "")
    } else if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn tiers(poor: f64, excellent: f64, unit: &str) -> Vec<ThematicRange> {
    vec![
        ThematicRange::new(None, Some(poor), POOR, format!("Poor (<= {poor}{unit})")),
        ThematicRange::new(
            Some(poor),
            Some(excellent),
            FAIR,
            format!("Fair ({poor} to {excellent}{unit})"),
        ),
        ThematicRange::new(
            Some(excellent),
            None,
            EXCELLENT,
            format!("Excellent (> {excellent}{unit})"),
        ),
    ]
}

/// quality tiers for well-known radio measurements.
fn preset_ranges(key: &str) -> Option<Vec<ThematicRange>> {
    let ranges = if key.contains("throughput") || key.contains("http download") {
        tiers(2000.0, 5000.0, "")
    } else if key.contains("couverture") || key.contains("rsrp") {
        tiers(-110.0, -100.0, "")
    } else if key.contains("rxlev") {
        tiers(-95.0, -85.0, "")
    } else if key.contains("rscp") {
        tiers(-100.0, -90.0, "")
    } else if key.contains("sinr") {
        tiers(0.0, 15.0, " dB")
    } else if key.contains("rsrq") {
        tiers(-15.0, -10.0, " dB")
    } else {
        return None;
    };
    Some(ranges)
}

fn equal_interval(numbers: &[f64]) -> Vec<ThematicRange> {
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let step = (max - min) / EQUAL_INTERVAL_RAMP.len() as f64;
    EQUAL_INTERVAL_RAMP
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let lo = min + i as f64 * step;
            let hi = min + (i + 1) as f64 * step;
            ThematicRange::new(
                Some(lo),
                Some(hi),
                color,
                format!("{} - {}", lo.round(), hi.round()),
            )
        })
        .collect()
}
