//! The immutable in-memory landings table.

use crate::quality::DataQualityReport;
use crate::record::Record;
use std::collections::BTreeSet;

/// An ordered, immutable sequence of landing records with cached option lists.
///
/// Option lists hold only non-empty values, without duplicates, sorted
/// ascending. Share across sessions with `Arc<Dataset>`; no interior mutability.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    species: Vec<String>,
    years: Vec<i32>,
    ports: Vec<String>,
    quality: DataQualityReport,
}

impl Dataset {
    /// Build a dataset from already-cleaned records.
    pub fn new(records: Vec<Record>) -> Self {
        let quality = DataQualityReport {
            rows_read: records.len(),
            rows_loaded: records.len(),
            rows_without_landed_weight: records
                .iter()
                .filter(|r| r.landed_weight().is_none())
                .count(),
            rows_without_position: records.iter().filter(|r| r.position().is_none()).count(),
            ..Default::default()
        };
        Self::with_quality(records, quality)
    }

    pub(crate) fn with_quality(records: Vec<Record>, quality: DataQualityReport) -> Self {
        let mut species = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut ports = BTreeSet::new();
        for record in &records {
            if !record.species.is_empty() {
                species.insert(record.species.clone());
            }
            years.insert(record.year);
            if !record.port.is_empty() {
                ports.insert(record.port.clone());
            }
        }
        log::debug!(
            "[Landings] dataset: {} records, {} species, {} years, {} ports",
            records.len(),
            species.len(),
            years.len(),
            ports.len()
        );
        Self {
            records,
            species: species.into_iter().collect(),
            years: years.into_iter().collect(),
            ports: ports.into_iter().collect(),
            quality,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct species, lexicographic.
    pub fn species_options(&self) -> &[String] {
        &self.species
    }

    /// Distinct years, ascending.
    pub fn year_options(&self) -> &[i32] {
        &self.years
    }

    /// Distinct ports, lexicographic.
    pub fn port_options(&self) -> &[String] {
        &self.ports
    }

    pub fn quality(&self) -> &DataQualityReport {
        &self.quality
    }

    pub fn has_species(&self, species: &str) -> bool {
        self.species
            .binary_search_by(|s| s.as_str().cmp(species))
            .is_ok()
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    pub fn has_port(&self, port: &str) -> bool {
        self.ports.binary_search_by(|p| p.as_str().cmp(port)).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::Dataset;
    use crate::record::Record;

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            Record::new(2021, "Torsk", "Skagen").with_landed_weight(50.0),
            Record::new(2019, "Sild", "Esbjerg").with_landed_weight(10.0),
            Record::new(2020, "Torsk", "Esbjerg"),
            Record::new(2019, "Torsk", "Hirtshals").with_position(57.59, 9.96),
            Record::new(2021, "Sild", "Skagen"),
        ])
    }

    #[test]
    fn options_are_sorted_and_distinct() {
        let dataset = sample_dataset();
        assert_eq!(dataset.species_options(), ["Sild", "Torsk"]);
        assert_eq!(dataset.year_options(), [2019, 2020, 2021]);
        assert_eq!(dataset.port_options(), ["Esbjerg", "Hirtshals", "Skagen"]);
    }

    #[test]
    fn options_exclude_empty_values() {
        let dataset = Dataset::new(vec![
            Record::new(2020, "", "Esbjerg"),
            Record::new(2020, "Torsk", ""),
        ]);
        assert_eq!(dataset.species_options(), ["Torsk"]);
        assert_eq!(dataset.port_options(), ["Esbjerg"]);
    }

    #[test]
    fn records_keep_input_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.len(), 5);
        assert_eq!(dataset.records()[0].port, "Skagen");
        assert_eq!(dataset.records()[4].species, "Sild");
    }

    #[test]
    fn membership_lookups() {
        let dataset = sample_dataset();
        assert!(dataset.has_species("Torsk"));
        assert!(!dataset.has_species("Rødspætte"));
        assert!(dataset.has_year(2020));
        assert!(!dataset.has_year(1999));
        assert!(dataset.has_port("Hirtshals"));
        assert!(!dataset.has_port("Thyborøn"));
    }

    #[test]
    fn direct_construction_reports_missing_fields() {
        let dataset = sample_dataset();
        let quality = dataset.quality();
        assert_eq!(quality.rows_loaded, 5);
        assert_eq!(quality.rows_without_landed_weight, 3);
        assert_eq!(quality.rows_without_position, 4);
        assert!(quality.is_clean());
    }

    #[test]
    fn empty_dataset_has_no_options() {
        let dataset = Dataset::new(Vec::new());
        assert!(dataset.is_empty());
        assert!(dataset.species_options().is_empty());
        assert!(dataset.year_options().is_empty());
    }
}
