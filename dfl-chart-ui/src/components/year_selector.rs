//! Dropdown selector for the year shown on the map.

use crate::state::AppState;
use dfl_view::SelectionChange;
use dioxus::prelude::*;

#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.year_options.read().clone();
    let selected = state.selection.read().as_ref().map(|s| s.year);

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<i32>() {
        Ok(year) => state.dispatch(SelectionChange::new().year(year)),
        Err(_) => log::warn!("[Landings] year_selector: Ignoring year {:?}", evt.value()),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Choose year:"
            }
            select {
                id: "year-select",
                onchange: on_change,
                for year in years.iter().copied() {
                    option {
                        value: "{year}",
                        selected: Some(year) == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
