//! Landed weight over time, one series per port.

use crate::selection::Selection;
use dfl_data::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// Shown instead of a chart when no ports are selected.
pub const NO_PORTS_NOTICE: &str = "Select one or more ports to see time series";
/// Shown instead of a chart when the selected ports have no landings of the species.
pub const NO_LANDINGS_NOTICE: &str = "No landings recorded for the selected ports";

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub year: i32,
    /// Landed weight in kg, summed over rows sharing the port and year.
    pub weight: f64,
}

/// Port name to its points, strictly ascending by year.
///
/// Ports without a usable row are absent rather than present and empty.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct SeriesModel {
    pub series: BTreeMap<String, Vec<SeriesPoint>>,
}

impl SeriesModel {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of port groups.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn get(&self, port: &str) -> Option<&[SeriesPoint]> {
        self.series.get(port).map(Vec::as_slice)
    }

    pub fn ports(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

/// Group rows by port and sum landed weight per year.
///
/// Rows without a landed weight are skipped.
pub fn build_series_model(rows: &[&Record]) -> SeriesModel {
    let mut grouped: BTreeMap<String, BTreeMap<i32, f64>> = BTreeMap::new();
    let mut skipped = 0usize;
    for row in rows {
        let Some(weight) = row.landed_weight() else {
            skipped += 1;
            continue;
        };
        *grouped
            .entry(row.port.clone())
            .or_default()
            .entry(row.year)
            .or_insert(0.0) += weight;
    }
    if skipped > 0 {
        log::debug!("[Landings] series: Skipped {} rows without landed weight", skipped);
    }

    let series = grouped
        .into_iter()
        .map(|(port, years)| {
            let points = years
                .into_iter()
                .map(|(year, weight)| SeriesPoint { year, weight })
                .collect();
            (port, points)
        })
        .collect();
    SeriesModel { series }
}

/// The placeholder the series view shows instead of a chart, if any.
pub fn series_notice(selection: &Selection, model: &SeriesModel) -> Option<&'static str> {
    if selection.ports.is_empty() {
        Some(NO_PORTS_NOTICE)
    } else if model.is_empty() {
        Some(NO_LANDINGS_NOTICE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn build(rows: &[Record]) -> SeriesModel {
        let refs: Vec<&Record> = rows.iter().collect();
        build_series_model(&refs)
    }

    #[test]
    fn groups_by_port_and_orders_by_year() {
        let model = build(&[
            Record::new(2022, "Torsk", "Esbjerg").with_landed_weight(30.0),
            Record::new(2019, "Torsk", "Esbjerg").with_landed_weight(10.0),
            Record::new(2020, "Torsk", "Skagen").with_landed_weight(5.0),
            Record::new(2021, "Torsk", "Esbjerg").with_landed_weight(20.0),
        ]);
        assert_eq!(model.len(), 2);
        let years: Vec<i32> = model.get("Esbjerg").unwrap().iter().map(|p| p.year).collect();
        assert_eq!(years, [2019, 2021, 2022]);
        assert_eq!(model.get("Skagen").unwrap(), [SeriesPoint { year: 2020, weight: 5.0 }]);
    }

    #[test]
    fn years_strictly_ascend_within_every_port() {
        let model = build(&[
            Record::new(2021, "Torsk", "Esbjerg").with_landed_weight(1.0),
            Record::new(2020, "Torsk", "Esbjerg").with_landed_weight(2.0),
            Record::new(2021, "Torsk", "Esbjerg").with_landed_weight(3.0),
            Record::new(2020, "Torsk", "Skagen").with_landed_weight(4.0),
            Record::new(2018, "Torsk", "Skagen").with_landed_weight(5.0),
        ]);
        for (_, points) in &model.series {
            for pair in points.windows(2) {
                assert!(pair[0].year < pair[1].year);
            }
        }
    }

    #[test]
    fn same_port_and_year_are_summed() {
        let model = build(&[
            Record::new(2021, "Torsk", "Esbjerg").with_landed_weight(1.5),
            Record::new(2021, "Torsk", "Esbjerg").with_landed_weight(2.5),
        ]);
        assert_eq!(model.get("Esbjerg").unwrap(), [SeriesPoint { year: 2021, weight: 4.0 }]);
    }

    #[test]
    fn ports_without_weight_are_absent() {
        let model = build(&[
            Record::new(2021, "Torsk", "Esbjerg").with_landed_weight(1.0),
            Record::new(2021, "Torsk", "Skagen"),
        ]);
        assert_eq!(model.ports().collect::<Vec<_>>(), ["Esbjerg"]);
        assert!(model.get("Skagen").is_none());
    }

    #[test]
    fn notice_depends_on_ports_and_data() {
        let mut selection = Selection {
            species: "Torsk".to_string(),
            year: 2020,
            ports: BTreeSet::new(),
        };
        let empty = SeriesModel::default();
        assert_eq!(series_notice(&selection, &empty), Some(NO_PORTS_NOTICE));

        selection.ports.insert("Esbjerg".to_string());
        assert_eq!(series_notice(&selection, &empty), Some(NO_LANDINGS_NOTICE));

        let model = build(&[Record::new(2020, "Torsk", "Esbjerg").with_landed_weight(1.0)]);
        assert_eq!(series_notice(&selection, &model), None);
    }

    #[test]
    fn serializes_as_port_mapping() {
        let model = build(&[Record::new(2020, "Torsk", "Esbjerg").with_landed_weight(100.0)]);
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#"{"Esbjerg":[{"year":2020,"weight":100.0}]}"#);
    }
}
