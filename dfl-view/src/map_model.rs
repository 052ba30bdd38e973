//! Map markers for the selected species and year.
//!
//! Markers are not aggregated: two landings at the same port produce two
//! markers on top of each other. Size and colour both encode landed weight;
//! the renderer picks the scale from [`MapModel::weight_range`].

use dfl_data::Record;
use dfl_utils::numbers::format_amount;
use serde::Serialize;

/// Hover label for the landed weight.
pub const WEIGHT_LABEL: &str = "Landet vægt (kg)";
/// Hover label for the first-hand value.
pub const VALUE_LABEL: &str = "Værdi (kr)";

/// One plotted landing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub port: String,
    pub lat: f64,
    pub lon: f64,
    /// Landed weight in kg; drives both size and colour.
    pub weight: f64,
    pub value: Option<f64>,
    /// Port, weight and value. Never the coordinates.
    pub hover: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct MapModel {
    pub markers: Vec<Marker>,
    /// Rows left off the map for lack of coordinates or landed weight.
    pub unplotted: usize,
    /// (min, max) landed weight over `markers`.
    pub weight_range: Option<(f64, f64)>,
}

impl MapModel {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.markers.iter().map(|m| m.weight).sum()
    }
}

/// Hover text for a landing: port name, landed weight and value.
pub fn hover_text(port: &str, weight: f64, value: Option<f64>) -> String {
    let value = value.map(format_amount).unwrap_or_else(|| "n/a".to_string());
    format!(
        "<b>{}</b><br>{}: {}<br>{}: {}",
        port,
        WEIGHT_LABEL,
        format_amount(weight),
        VALUE_LABEL,
        value
    )
}

/// Build one marker per row that has coordinates and a landed weight.
pub fn build_map_model(rows: &[&Record]) -> MapModel {
    let mut model = MapModel::default();
    for row in rows {
        let (Some((lat, lon)), Some(weight)) = (row.position(), row.landed_weight()) else {
            model.unplotted += 1;
            continue;
        };
        model.weight_range = Some(match model.weight_range {
            Some((min, max)) => (min.min(weight), max.max(weight)),
            None => (weight, weight),
        });
        model.markers.push(Marker {
            port: row.port.clone(),
            lat,
            lon,
            weight,
            value: row.value_kr,
            hover: hover_text(&row.port, weight, row.value_kr),
        });
    }
    log::debug!(
        "[Landings] map: {} markers, {} unplotted",
        model.markers.len(),
        model.unplotted
    );
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_marker_per_row() {
        let rows = [
            Record::new(2020, "Torsk", "Esbjerg")
                .with_position(55.47, 8.45)
                .with_landed_weight(100.0)
                .with_value(2500.0),
            Record::new(2020, "Torsk", "Esbjerg")
                .with_position(55.47, 8.45)
                .with_landed_weight(40.0),
            Record::new(2020, "Torsk", "Skagen")
                .with_position(57.72, 10.58)
                .with_landed_weight(50.0),
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        let model = build_map_model(&refs);

        assert_eq!(model.markers.len(), 3);
        assert_eq!(model.markers[0].port, "Esbjerg");
        assert_eq!(model.markers[1].port, "Esbjerg");
        assert_eq!(model.unplotted, 0);
        assert_eq!(model.weight_range, Some((40.0, 100.0)));
        assert!((model.total_weight() - 190.0).abs() < 1e-9);
    }

    #[test]
    fn rows_without_position_or_weight_are_unplotted() {
        let rows = [
            Record::new(2020, "Torsk", "Esbjerg").with_landed_weight(100.0),
            Record::new(2020, "Torsk", "Skagen").with_position(57.72, 10.58),
            Record::new(2020, "Torsk", "Hirtshals")
                .with_position(57.59, 9.96)
                .with_landed_weight(7.0),
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        let model = build_map_model(&refs);

        assert_eq!(model.markers.len(), 1);
        assert_eq!(model.markers[0].port, "Hirtshals");
        assert_eq!(model.unplotted, 2);
    }

    #[test]
    fn hover_has_port_weight_and_value_but_no_coordinates() {
        let rows = [Record::new(2020, "Torsk", "Esbjerg")
            .with_position(55.4712, 8.4519)
            .with_landed_weight(1200.0)
            .with_value(30000.0)];
        let refs: Vec<&Record> = rows.iter().collect();
        let hover = &build_map_model(&refs).markers[0].hover;

        assert!(hover.contains("Esbjerg"));
        assert!(hover.contains("Landet vægt (kg): 1,200"));
        assert!(hover.contains("Værdi (kr): 30,000"));
        assert!(!hover.contains("55.47"));
        assert!(!hover.contains("8.45"));
    }

    #[test]
    fn hover_marks_missing_value() {
        assert_eq!(
            hover_text("Skagen", 50.0, None),
            "<b>Skagen</b><br>Landet vægt (kg): 50<br>Værdi (kr): n/a"
        );
    }

    #[test]
    fn empty_rows_give_empty_model() {
        let model = build_map_model(&[]);
        assert!(model.is_empty());
        assert_eq!(model.weight_range, None);
        assert_eq!(model, MapModel::default());
    }

    #[test]
    fn weight_range_is_sent_to_the_renderer() {
        let rows = [
            Record::new(2020, "Torsk", "Esbjerg")
                .with_position(55.47, 8.45)
                .with_landed_weight(100.0),
            Record::new(2020, "Torsk", "Skagen").with_landed_weight(5.0),
            Record::new(2020, "Torsk", "Skagen")
                .with_position(57.72, 10.58)
                .with_landed_weight(40.0),
        ];
        let refs: Vec<&Record> = rows.iter().collect();
        let json = serde_json::to_value(build_map_model(&refs)).unwrap();
        assert_eq!(json["weight_range"], serde_json::json!([40.0, 100.0]));
        assert_eq!(json["unplotted"], 1);
        assert_eq!(json["markers"].as_array().unwrap().len(), 2);

        let empty = serde_json::to_value(MapModel::default()).unwrap();
        assert!(empty["weight_range"].is_null());
    }
}
