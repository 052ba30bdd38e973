//! Counters for cells and rows the loader could not use.

use serde::Serialize;

/// Non-fatal data-quality findings from a load.
///
/// Rows missing a required field (year, species, port) are dropped.
/// Rows with an uncoercible optional field are kept with that field set to `None`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DataQualityReport {
    pub rows_read: usize,
    pub rows_loaded: usize,
    /// Year blank or not an integer
    pub missing_year: usize,
    pub missing_species: usize,
    pub missing_port: usize,
    /// Landed and live weight cells present but not numeric
    pub invalid_weight: usize,
    /// Value cells present but not numeric
    pub invalid_value: usize,
    /// Latitude and longitude cells present but not numeric
    pub invalid_coordinates: usize,
    /// Loaded rows without a usable landed weight
    pub rows_without_landed_weight: usize,
    /// Loaded rows without both coordinates
    pub rows_without_position: usize,
}

impl DataQualityReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_read.saturating_sub(self.rows_loaded)
    }

    pub fn is_clean(&self) -> bool {
        self.rows_dropped() == 0
            && self.invalid_weight == 0
            && self.invalid_value == 0
            && self.invalid_coordinates == 0
    }
}

#[cfg(test)]
mod tests {
    use super::DataQualityReport;

    #[test]
    fn test_default_report_is_clean() {
        let report = DataQualityReport::default();
        assert!(report.is_clean());
        assert_eq!(report.rows_dropped(), 0);
    }

    #[test]
    fn test_dropped_rows_make_report_unclean() {
        let report = DataQualityReport {
            rows_read: 10,
            rows_loaded: 8,
            missing_year: 2,
            ..Default::default()
        };
        assert_eq!(report.rows_dropped(), 2);
        assert!(!report.is_clean());
    }
}
