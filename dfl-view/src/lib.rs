//! Filtering and view-model derivation for the landings explorer.
//!
//! A [`Controller`] owns the current [`Selection`] over a shared, immutable
//! [`Dataset`](dfl_data::Dataset) and keeps two view models in step with it:
//!
//! - the map model: one marker per landing of the selected species and year
//! - the series model: landed weight per year for each selected port
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use dfl_data::{Dataset, Record};
//! use dfl_view::{Controller, SelectionChange};
//!
//! let dataset = Arc::new(Dataset::new(vec![
//!     Record::new(2020, "Torsk", "Esbjerg").with_position(55.47, 8.45).with_landed_weight(100.0),
//!     Record::new(2020, "Torsk", "Skagen").with_position(57.72, 10.58).with_landed_weight(50.0),
//! ]));
//! let mut controller = Controller::new(dataset).unwrap();
//!
//! let views = controller.on_selection_changed(
//!     SelectionChange::new().ports(["Esbjerg", "Skagen"]),
//! );
//! assert_eq!(views.map.markers.len(), 2);
//! assert_eq!(views.series.len(), 2);
//! ```

pub mod controller;
pub mod error;
pub mod filter;
pub mod map_model;
pub mod selection;
pub mod series_model;

pub use controller::{Controller, ControllerState, Recompute, Views};
pub use error::ViewError;
pub use map_model::{build_map_model, MapModel, Marker};
pub use selection::{ChangedFields, Selection, SelectionChange, DEFAULT_SPECIES};
pub use series_model::{build_series_model, series_notice, SeriesModel, SeriesPoint};
