//! Core types for Danish fishery landing data.
//!
//! A [`Dataset`] is built once, from records or from CSV via the loader, and
//! is immutable afterwards. It caches the sorted option lists (species, years,
//! ports) used to populate selectors.
//!
//! # Usage
//!
//! ```rust
//! use dfl_data::Dataset;
//!
//! let csv = "År,Art,Landingsplads,lat,lon,Landet vægt (kg),Værdi (kr)\n\
//!            2020,Torsk,Esbjerg,55.47,8.45,\"1,200\",30000\n";
//! let dataset = Dataset::from_csv(csv).unwrap();
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.records()[0].landed_weight_kg, Some(1200.0));
//! assert_eq!(dataset.species_options(), ["Torsk".to_string()]);
//! ```

pub mod dataset;
pub mod error;
mod loader;
pub mod quality;
pub mod record;

pub use dataset::Dataset;
pub use error::LoadError;
pub use quality::DataQualityReport;
pub use record::Record;
