//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! Selection changes go through [`AppState::dispatch`], which hands them to the
//! session's `Controller` and then sets only the view-model signals the
//! controller rebuilt. Chart effects subscribe to those signals, so each
//! change redraws exactly the affected chart.

use dfl_data::Dataset;
use dfl_view::{Controller, MapModel, Selection, SelectionChange, SeriesModel};
use dioxus::prelude::*;
use std::sync::Arc;

/// Shared application state for landings chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session controller (None until the dataset is loaded)
    pub controller: Signal<Option<Controller>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current selection, mirrored from the controller
    pub selection: Signal<Option<Selection>>,
    pub species_options: Signal<Vec<String>>,
    pub year_options: Signal<Vec<i32>>,
    pub port_options: Signal<Vec<String>>,
    /// Markers for the selected species and year
    pub map_model: Signal<MapModel>,
    /// Per-port series for the selected species and ports
    pub series_model: Signal<SeriesModel>,
    /// Placeholder shown instead of the series chart
    pub series_notice: Signal<Option<&'static str>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            controller: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selection: Signal::new(None),
            species_options: Signal::new(Vec::new()),
            year_options: Signal::new(Vec::new()),
            port_options: Signal::new(Vec::new()),
            map_model: Signal::new(MapModel::default()),
            series_model: Signal::new(SeriesModel::default()),
            series_notice: Signal::new(None),
        }
    }

    /// Parse the embedded CSV and start a session, or record the error.
    pub fn load_csv(&mut self, csv_data: &str) {
        let controller = Dataset::from_csv(csv_data)
            .map_err(|e| format!("Failed to load landings data: {}", e))
            .and_then(|dataset| {
                Controller::new(Arc::new(dataset))
                    .map_err(|e| format!("Failed to start session: {}", e))
            });
        match controller {
            Ok(controller) => self.attach(controller),
            Err(msg) => {
                log::error!("[Landings] state: {}", msg);
                self.error_msg.set(Some(msg));
            }
        }
        self.loading.set(false);
    }

    /// Publish a fresh controller's options and views.
    pub fn attach(&mut self, controller: Controller) {
        self.species_options.set(controller.species_options().to_vec());
        self.year_options.set(controller.year_options().to_vec());
        self.port_options.set(controller.port_options().to_vec());
        self.selection.set(Some(controller.selection().clone()));
        self.map_model.set(controller.views().map.clone());
        self.series_model.set(controller.views().series.clone());
        self.series_notice.set(controller.series_notice());
        self.controller.set(Some(controller));
    }

    /// Route a selection change through the controller and publish what it rebuilt.
    pub fn dispatch(&mut self, change: SelectionChange) {
        let (selection, rebuilt_map, rebuilt_series, notice) = {
            let mut guard = self.controller.write();
            let Some(controller) = &mut *guard else {
                log::warn!("[Landings] state: Selection change before data loaded");
                return;
            };
            controller.on_selection_changed(change);
            let done = controller.last_recompute();
            (
                controller.selection().clone(),
                done.map.then(|| controller.views().map.clone()),
                done.series.then(|| controller.views().series.clone()),
                controller.series_notice(),
            )
        };

        self.selection.set(Some(selection));
        if let Some(map) = rebuilt_map {
            self.map_model.set(map);
        }
        if let Some(series) = rebuilt_series {
            self.series_model.set(series);
            self.series_notice.set(notice);
        }
    }

    /// Add or remove one port from the current port set.
    pub fn toggle_port(&mut self, port: &str) {
        let current = self.selection.peek().clone();
        let Some(Selection { mut ports, .. }) = current else {
            return;
        };
        if !ports.remove(port) {
            ports.insert(port.to_string());
        }
        self.dispatch(SelectionChange::new().ports(ports));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
