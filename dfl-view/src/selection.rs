//! The user's current filter choices and partial updates to them.

use dfl_data::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Species selected on startup when the dataset has it (cod).
pub const DEFAULT_SPECIES: &str = "Torsk";

/// Active filters. A value type: changes produce a new `Selection`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub species: String,
    pub year: i32,
    pub ports: BTreeSet<String>,
}

/// A partial selection coming from the UI. `None` fields are left as they are.
///
/// `ports: Some(vec![])` clears the port set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub species: Option<String>,
    pub year: Option<i32>,
    pub ports: Option<Vec<String>>,
}

/// Which fields differ between two selections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangedFields {
    pub species: bool,
    pub year: bool,
    pub ports: bool,
}

impl ChangedFields {
    pub fn any(&self) -> bool {
        self.species || self.year || self.ports
    }

    /// The map filters on species and year.
    pub fn affects_map(&self) -> bool {
        self.species || self.year
    }

    /// The series filters on species and ports.
    pub fn affects_series(&self) -> bool {
        self.species || self.ports
    }
}

impl SelectionChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn ports<I, S>(mut self, ports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ports = Some(ports.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_none() && self.year.is_none() && self.ports.is_none()
    }
}

impl Selection {
    /// Default selection: cod (or the first species), the earliest year and
    /// the first port in sorted order. `None` when the dataset has no options.
    pub fn defaults(dataset: &Dataset) -> Option<Selection> {
        let species = if dataset.has_species(DEFAULT_SPECIES) {
            DEFAULT_SPECIES.to_string()
        } else {
            dataset.species_options().first()?.clone()
        };
        let year = *dataset.year_options().first()?;
        let ports = dataset.port_options().first().cloned().into_iter().collect();
        Some(Selection {
            species,
            year,
            ports,
        })
    }

    /// Apply a partial change.
    ///
    /// A species or year the dataset does not offer is still taken; the
    /// filters then match nothing and the views come out empty. Unknown ports
    /// are dropped from the new set. Returns the new selection and the fields
    /// that actually changed.
    pub fn apply(&self, change: &SelectionChange, dataset: &Dataset) -> (Selection, ChangedFields) {
        let mut next = self.clone();

        if let Some(species) = &change.species {
            if !dataset.has_species(species) {
                log::warn!("[Landings] selection: No landings of species {:?}", species);
            }
            next.species = species.clone();
        }

        if let Some(year) = change.year {
            if !dataset.has_year(year) {
                log::warn!("[Landings] selection: No landings in year {}", year);
            }
            next.year = year;
        }

        if let Some(ports) = &change.ports {
            next.ports = ports
                .iter()
                .filter(|port| {
                    let known = dataset.has_port(port);
                    if !known {
                        log::warn!("[Landings] selection: Dropping unknown port {:?}", port);
                    }
                    known
                })
                .cloned()
                .collect();
        }

        let changed = self.diff(&next);
        (next, changed)
    }

    pub fn diff(&self, other: &Selection) -> ChangedFields {
        ChangedFields {
            species: self.species != other.species,
            year: self.year != other.year,
            ports: self.ports != other.ports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfl_data::Record;

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            Record::new(2021, "Torsk", "Skagen"),
            Record::new(2019, "Sild", "Hirtshals"),
            Record::new(2020, "Torsk", "Esbjerg"),
        ])
    }

    #[test]
    fn defaults_prefer_cod() {
        let selection = Selection::defaults(&sample_dataset()).unwrap();
        assert_eq!(selection.species, "Torsk");
        assert_eq!(selection.year, 2019);
        assert_eq!(selection.ports, BTreeSet::from(["Esbjerg".to_string()]));
    }

    #[test]
    fn defaults_fall_back_to_first_species() {
        let dataset = Dataset::new(vec![
            Record::new(2020, "Sild", "Skagen"),
            Record::new(2020, "Hornfisk", "Skagen"),
        ]);
        let selection = Selection::defaults(&dataset).unwrap();
        assert_eq!(selection.species, "Hornfisk");
    }

    #[test]
    fn defaults_need_records() {
        assert_eq!(Selection::defaults(&Dataset::new(Vec::new())), None);
    }

    #[test]
    fn apply_reports_changed_fields() {
        let dataset = sample_dataset();
        let selection = Selection::defaults(&dataset).unwrap();

        let (next, changed) = selection.apply(&SelectionChange::new().year(2021), &dataset);
        assert_eq!(next.year, 2021);
        assert_eq!(
            changed,
            ChangedFields {
                species: false,
                year: true,
                ports: false
            }
        );
        assert!(changed.affects_map());
        assert!(!changed.affects_series());

        let (_, changed) = next.apply(&SelectionChange::new().ports(["Skagen"]), &dataset);
        assert!(!changed.affects_map());
        assert!(changed.affects_series());

        let (_, changed) = next.apply(&SelectionChange::new().species("Sild"), &dataset);
        assert!(changed.affects_map());
        assert!(changed.affects_series());
    }

    #[test]
    fn apply_same_values_changes_nothing() {
        let dataset = sample_dataset();
        let selection = Selection::defaults(&dataset).unwrap();
        let change = SelectionChange::new()
            .species("Torsk")
            .year(2019)
            .ports(["Esbjerg"]);
        let (next, changed) = selection.apply(&change, &dataset);
        assert_eq!(next, selection);
        assert!(!changed.any());
    }

    #[test]
    fn apply_takes_unknown_species_and_year_but_drops_unknown_ports() {
        let dataset = sample_dataset();
        let selection = Selection::defaults(&dataset).unwrap();
        let change = SelectionChange::new()
            .species("Hornfisk")
            .year(1999)
            .ports(["Skagen", "Thyborøn"]);
        let (next, changed) = selection.apply(&change, &dataset);
        assert_eq!(next.species, "Hornfisk");
        assert_eq!(next.year, 1999);
        assert_eq!(next.ports, BTreeSet::from(["Skagen".to_string()]));
        assert!(changed.ports && changed.species && changed.year);
    }

    #[test]
    fn apply_empty_ports_clears_set() {
        let dataset = sample_dataset();
        let selection = Selection::defaults(&dataset).unwrap();
        let (next, changed) =
            selection.apply(&SelectionChange::new().ports(Vec::<String>::new()), &dataset);
        assert!(next.ports.is_empty());
        assert!(changed.ports);
    }
}
