//! Fish Landings in Denmark
//!
//! A map of landings for one species and year, and a time series of landed
//! weight for a set of ports. The species picker drives both charts, the
//! year picker only the map, and the port picker only the time series.
//!
//! Data flow:
//! 1. `build.rs` copies `landings.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed once and a session controller is started.
//! 4. Each picker sends a `SelectionChange` through `AppState::dispatch`;
//!    the chart effects below rerun only for the view models that changed.

use dfl_chart_ui::chart_config::{MapConfig, SeriesConfig};
use dfl_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PortSelector, SpeciesSelector,
    YearSelector, REQUIRED_COLUMNS_HINT,
};
use dfl_chart_ui::js_bridge;
use dfl_chart_ui::state::AppState;
use dioxus::prelude::*;

/// Landings by year, species and port.
const LANDINGS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/landings.csv"));

/// DOM element IDs used by D3.js to render into.
const MAP_CHART_ID: &str = "landings-map";
const SERIES_CHART_ID: &str = "landings-series";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("landings-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the dataset and start the session on mount
    use_effect(move || {
        state.load_csv(LANDINGS_CSV);
        js_bridge::init_charts();
    });

    // Redraw the map whenever its model is rebuilt
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let model = state.map_model.read().clone();
        let Some((species, year)) = state
            .selection
            .peek()
            .as_ref()
            .map(|s| (s.species.clone(), s.year))
        else {
            return;
        };

        log::info!(
            "[Landings] chart-landings: Drawing {} markers for {} {}",
            model.markers.len(),
            species,
            year
        );
        let config = MapConfig::for_selection(&species, year);
        js_bridge::render_landings_map(
            MAP_CHART_ID,
            &js_bridge::to_json(&model),
            &js_bridge::to_json(&config),
        );
    });

    // Redraw the time series whenever its model is rebuilt
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let model = state.series_model.read().clone();
        if (state.series_notice)().is_some() {
            js_bridge::destroy_chart(SERIES_CHART_ID);
            return;
        }
        let Some(species) = state.selection.peek().as_ref().map(|s| s.species.clone()) else {
            return;
        };

        log::info!(
            "[Landings] chart-landings: Drawing {} port series for {}",
            model.len(),
            species
        );
        let config = SeriesConfig::for_species(&species);
        js_bridge::render_port_series(
            SERIES_CHART_ID,
            &js_bridge::to_json(&model),
            &js_bridge::to_json(&config),
        );
    });

    let unplotted = state.map_model.read().unplotted;
    let map_subtitle = if unplotted > 0 {
        format!("{} landings without coordinates or landed weight are not shown", unplotted)
    } else {
        String::new()
    };

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 {
                style: "margin: 0 0 12px 0;",
                "Fish Landings in Denmark"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    hint: REQUIRED_COLUMNS_HINT.to_string(),
                }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: flex-end;",
                    SpeciesSelector {}
                    YearSelector {}
                }
                PortSelector {}

                if !map_subtitle.is_empty() {
                    p {
                        style: "margin: 4px 0; font-size: 12px; color: #666;",
                        "{map_subtitle}"
                    }
                }
                ChartContainer {
                    id: MAP_CHART_ID.to_string(),
                    height: "70vh".to_string(),
                }

                ChartHeader {
                    title: "Time series for selected ports".to_string(),
                    subtitle: "Landet vægt (kg) per year, summed over each port's landings".to_string(),
                }
                ChartContainer {
                    id: SERIES_CHART_ID.to_string(),
                    height: "420px".to_string(),
                    notice: (state.series_notice)().map(str::to_string),
                }
            }
        }
    }
}
