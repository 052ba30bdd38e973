//! Row subsets for each view. Pure, single pass, dataset order preserved.

use dfl_data::{Dataset, Record};
use std::collections::BTreeSet;

/// Rows of one species landed in one year. Used only by the map.
pub fn filter_for_map<'a>(dataset: &'a Dataset, species: &str, year: i32) -> Vec<&'a Record> {
    dataset
        .records()
        .iter()
        .filter(|r| r.year == year && r.species == species)
        .collect()
}

/// Rows of one species landed at any of `ports`, across all years.
/// Used only by the time series. No ports selected means no rows.
pub fn filter_for_series<'a>(
    dataset: &'a Dataset,
    species: &str,
    ports: &BTreeSet<String>,
) -> Vec<&'a Record> {
    if ports.is_empty() {
        return Vec::new();
    }
    dataset
        .records()
        .iter()
        .filter(|r| r.species == species && ports.contains(&r.port))
        .collect()
}
