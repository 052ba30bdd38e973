//! Render settings passed to the D3 scripts alongside the view models.

use dfl_view::map_model::{VALUE_LABEL, WEIGHT_LABEL};
use serde::Serialize;

/// Map centre over Denmark, (lat, lon).
pub const MAP_CENTER: (f64, f64) = (56.0, 10.0);
/// Initial web-mercator zoom level when there is nothing to fit.
pub const MAP_ZOOM: f64 = 5.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub title: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    /// Fit the projection to the markers instead of the fixed centre and zoom.
    pub fit_to_markers: bool,
    /// Legend label for size and colour, both of which encode landed weight.
    pub weight_label: String,
    pub value_label: String,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl MapConfig {
    pub fn for_selection(species: &str, year: i32) -> Self {
        Self {
            title: format!("{} landings in {}", species, year),
            center_lat: MAP_CENTER.0,
            center_lon: MAP_CENTER.1,
            zoom: MAP_ZOOM,
            fit_to_markers: false,
            weight_label: WEIGHT_LABEL.to_string(),
            value_label: VALUE_LABEL.to_string(),
            min_radius: 3.0,
            max_radius: 28.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub show_markers: bool,
}

impl SeriesConfig {
    pub fn for_species(species: &str) -> Self {
        Self {
            title: format!("Landings over time: {}", species),
            x_axis_label: "År".to_string(),
            y_axis_label: WEIGHT_LABEL.to_string(),
            show_markers: true,
        }
    }
}
