use serde::{Deserialize, Serialize};
use uom::si::f64::Length;
use uom::si::length::meter;

pub const DEFAULT_SECTOR_OPACITY: f64 = 0.5;

/// one antenna sector of a structured site.
///
/// azimuth and beamwidth are in degrees clockwise from north, range in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub azimuth: f64,
    pub beamwidth: f64,
    pub range: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
}

impl Sector {
    pub fn new(azimuth: f64, beamwidth: f64, range: f64) -> Sector {
        Sector {
            name: None,
            azimuth,
            beamwidth,
            range,
            color: None,
            opacity: None,
            technology: None,
            frequency: None,
        }
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Sector {
        self.technology = Some(technology.into());
        self
    }

    pub fn range_length(&self) -> Length {
        Length::new::<meter>(self.range)
    }

    /// explicit color if set, otherwise a color keyed on the radio technology.
    pub fn display_color(&self) -> &str {
        if let Some(color) = self.color.as_deref().filter(|c| !c.is_empty()) {
            return color;
        }
        let tech = self.technology.as_deref().unwrap_or_default();
        if tech.contains("5G") {
            "#8b5cf6"
        } else if tech.contains("4G") {
            "#3b82f6"
        } else if tech.contains("3G") {
            "#10b981"
        } else if tech.contains("2G") {
            "#f59e0b"
        } else {
            "#3388ff"
        }
    }

    pub fn display_opacity(&self) -> f64 {
        match self.opacity {
            Some(o) if o.is_finite() && o > 0.0 => o.min(1.0),
            _ => DEFAULT_SECTOR_OPACITY,
        }
    }

    /// checks that the sector describes a drawable wedge.
    pub fn validate(&self) -> Result<(), String> {
        if !self.azimuth.is_finite() {
            return Err(format!("azimuth must be finite, found {}", self.azimuth));
        }
        if !(self.beamwidth > 0.0 && self.beamwidth <= 360.0) {
            return Err(format!(
                "beamwidth must be in (0, 360], found {}",
                self.beamwidth
            ));
        }
        if !(self.range.is_finite() && self.range > 0.0) {
            return Err(format!("range must be positive, found {}", self.range));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technology_color_fallback() {
        let s = Sector::new(0.0, 65.0, 500.0).with_technology("LTE 4G");
        assert_eq!(s.display_color(), "#3b82f6");
        let s = Sector::new(0.0, 65.0, 500.0).with_technology("5G NR");
        assert_eq!(s.display_color(), "#8b5cf6");
        let s = Sector::new(0.0, 65.0, 500.0);
        assert_eq!(s.display_color(), "#3388ff");
        let mut s = Sector::new(0.0, 65.0, 500.0).with_technology("2G");
        s.color = Some(String::from("#000000"));
        assert_eq!(s.display_color(), "#000000");
    }

    #[test]
    fn test_opacity_fallback() {
        let mut s = Sector::new(0.0, 65.0, 500.0);
        assert_eq!(s.display_opacity(), DEFAULT_SECTOR_OPACITY);
        s.opacity = Some(0.3);
        assert_eq!(s.display_opacity(), 0.3);
        s.opacity = Some(4.0);
        assert_eq!(s.display_opacity(), 1.0);
        s.opacity = Some(0.0);
        assert_eq!(s.display_opacity(), DEFAULT_SECTOR_OPACITY);
    }

    #[test]
    fn test_validate() {
        assert!(Sector::new(120.0, 65.0, 1000.0).validate().is_ok());
        assert!(Sector::new(120.0, 0.0, 1000.0).validate().is_err());
        assert!(Sector::new(f64::NAN, 65.0, 1000.0).validate().is_err());
        assert!(Sector::new(120.0, 65.0, -1.0).validate().is_err());
    }
}
