//! Reusable Dioxus RSX components for landings chart apps.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod port_selector;
mod species_selector;
mod year_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::{ErrorDisplay, REQUIRED_COLUMNS_HINT};
pub use loading_spinner::LoadingSpinner;
pub use port_selector::PortSelector;
pub use species_selector::SpeciesSelector;
pub use year_selector::YearSelector;
