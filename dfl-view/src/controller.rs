//! Keeps the map and series view models consistent with the selection.
//!
//! Every selection change is processed to completion before the call
//! returns: apply, diff, filter, rebuild. Only the views whose filters read a
//! changed field are rebuilt (species or year for the map, species or ports
//! for the series). The dataset is shared and never written.

use crate::error::ViewError;
use crate::filter::{filter_for_map, filter_for_series};
use crate::map_model::{build_map_model, MapModel};
use crate::selection::{ChangedFields, Selection, SelectionChange};
use crate::series_model::{build_series_model, series_notice, SeriesModel};
use dfl_data::Dataset;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControllerState {
    Idle,
    Recomputing,
}

/// Which view models the last change rebuilt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Recompute {
    pub map: bool,
    pub series: bool,
}

/// Both render-ready view models.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Views {
    pub map: MapModel,
    pub series: SeriesModel,
}

/// One session: a selection over a shared dataset plus its derived views.
#[derive(Debug, Clone)]
pub struct Controller {
    dataset: Arc<Dataset>,
    selection: Selection,
    views: Views,
    state: ControllerState,
    last_recompute: Recompute,
}

impl Controller {
    /// Start a session with the default selection and both views built.
    pub fn new(dataset: Arc<Dataset>) -> Result<Self, ViewError> {
        let selection = Selection::defaults(&dataset).ok_or(ViewError::EmptyDataset)?;
        log::info!(
            "[Landings] controller: Starting with species={} year={} ports={:?}",
            selection.species,
            selection.year,
            selection.ports
        );
        let mut controller = Self {
            dataset,
            selection,
            views: Views::default(),
            state: ControllerState::Idle,
            last_recompute: Recompute::default(),
        };
        controller.recompute(ChangedFields {
            species: true,
            year: true,
            ports: true,
        });
        Ok(controller)
    }

    pub fn species_options(&self) -> &[String] {
        self.dataset.species_options()
    }

    pub fn year_options(&self) -> &[i32] {
        self.dataset.year_options()
    }

    pub fn port_options(&self) -> &[String] {
        self.dataset.port_options()
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn last_recompute(&self) -> Recompute {
        self.last_recompute
    }

    /// Placeholder text the series view should show instead of a chart.
    pub fn series_notice(&self) -> Option<&'static str> {
        series_notice(&self.selection, &self.views.series)
    }

    /// Apply a partial selection and rebuild the affected views.
    ///
    /// Unknown ports are dropped. Never fails: a species or year without
    /// landings gives an empty view model.
    pub fn on_selection_changed(&mut self, change: SelectionChange) -> &Views {
        let (next, changed) = self.selection.apply(&change, &self.dataset);
        self.selection = next;
        self.recompute(changed);
        &self.views
    }

    fn recompute(&mut self, changed: ChangedFields) {
        self.state = ControllerState::Recomputing;
        let mut done = Recompute::default();

        if changed.affects_map() {
            let rows = filter_for_map(&self.dataset, &self.selection.species, self.selection.year);
            self.views.map = build_map_model(&rows);
            done.map = true;
        }
        if changed.affects_series() {
            let rows =
                filter_for_series(&self.dataset, &self.selection.species, &self.selection.ports);
            self.views.series = build_series_model(&rows);
            done.series = true;
        }

        if done.map || done.series {
            log::debug!(
                "[Landings] controller: Rebuilt map={} series={} ({} markers, {} series)",
                done.map,
                done.series,
                self.views.map.markers.len(),
                self.views.series.len()
            );
        }
        self.last_recompute = done;
        self.state = ControllerState::Idle;
    }
}
