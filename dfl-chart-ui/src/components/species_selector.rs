//! Dropdown selector for the species shown on both charts.

use crate::state::AppState;
use dfl_view::SelectionChange;
use dioxus::prelude::*;

/// Species dropdown. Options come from the loaded dataset.
#[component]
pub fn SpeciesSelector() -> Element {
    let mut state = use_context::<AppState>();
    let species = state.species_options.read().clone();
    let selected = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.species.clone())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(SelectionChange::new().species(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "species-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Choose species:"
            }
            select {
                id: "species-select",
                onchange: on_change,
                for name in species.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
