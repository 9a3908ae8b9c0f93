use super::MapperConfigError;
use crate::layer::ClusterLayer;
use crate::list_panel::ListPanel;
use crate::locator::Locator;
use crate::view::HeadlessMapView;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// defines the behavior of the map, locator and list panel. every field has a
/// default, so a configuration file only needs to name what it changes.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct SectorMapperConfig {
    /// zoom used when a marker is located
    pub locate_zoom: u8,
    /// zoom used when only the stored position of an entity is known
    pub fallback_zoom: u8,
    pub highlight_ms: u64,
    /// degrees; how close a marker must be to count as the entity's marker
    pub coordinate_epsilon: f64,
    pub cluster_radius_px: f64,
    pub max_zoom: u8,
    pub initial_list_cap: usize,
    pub load_more_batch: usize,
    /// (latitude, longitude)
    pub default_center: (f64, f64),
    pub default_zoom: u8,
    pub fit_padding_px: u32,
    pub viewport_width_px: u32,
    pub viewport_height_px: u32,
    pub store_path: String,
    pub fit_bounds_on_start: bool,
    pub progress_bar: bool,
    /// attribute imported points are colored by on start, e.g. `custom:RSRP`
    pub thematic_attribute: Option<String>,
}

impl Default for SectorMapperConfig {
    fn default() -> Self {
        Self {
            locate_zoom: 18,
            fallback_zoom: 16,
            highlight_ms: 2000,
            coordinate_epsilon: 1e-5,
            cluster_radius_px: 80.0,
            max_zoom: 19,
            initial_list_cap: 50,
            load_more_batch: 100,
            default_center: (33.5731, -7.5898),
            default_zoom: 6,
            fit_padding_px: 50,
            viewport_width_px: 1280,
            viewport_height_px: 800,
            store_path: String::from("sector-mapper.json"),
            fit_bounds_on_start: true,
            progress_bar: false,
            thematic_attribute: None,
        }
    }
}

impl SectorMapperConfig {
    /// default center as a lon/lat point.
    pub fn default_center_point(&self) -> Point<f64> {
        let (lat, lng) = self.default_center;
        Point::new(lng, lat)
    }

    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    pub fn build_locator(&self) -> Locator {
        Locator {
            locate_zoom: self.locate_zoom,
            fallback_zoom: self.fallback_zoom,
            highlight: self.highlight_duration(),
            coordinate_epsilon: self.coordinate_epsilon,
        }
    }

    pub fn build_cluster_layer(&self) -> ClusterLayer {
        ClusterLayer::new(self.cluster_radius_px, self.max_zoom)
    }

    pub fn build_list_panel(&self) -> ListPanel {
        ListPanel::new(self.initial_list_cap, self.load_more_batch)
    }

    /// headless view sized to the configured viewport, at the default center.
    pub fn build_headless_view(&self) -> HeadlessMapView {
        HeadlessMapView::new(
            self.default_center_point(),
            self.default_zoom,
            self.max_zoom,
            self.viewport_width_px,
            self.viewport_height_px,
        )
    }
}

/// configuration file formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn of(path: &Path) -> Option<ConfigFormat> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    fn decode(&self, contents: &str) -> Result<SectorMapperConfig, String> {
        match self {
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        }
    }
}

impl TryFrom<&String> for SectorMapperConfig {
    type Error = MapperConfigError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let format = ConfigFormat::of(Path::new(f)).ok_or_else(|| {
            MapperConfigError::ConfigurationError(format!("unsupported file type: {f}"))
        })?;
        let contents = std::fs::read_to_string(f).map_err(|e| {
            MapperConfigError::ConfigurationError(format!("failure reading {f}: {e}"))
        })?;
        format.decode(&contents).map_err(|e| {
            MapperConfigError::ConfigurationError(format!("failure decoding {f}: {e}"))
        })
    }
}
