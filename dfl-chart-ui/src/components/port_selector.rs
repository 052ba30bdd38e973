//! Multi-select for the ports drawn on the time series.

use crate::state::AppState;
use dfl_view::SelectionChange;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct PortOptionProps {
    port: String,
    checked: bool,
}

/// One checkbox per port; toggling it adds or removes the port.
#[component]
fn PortOption(props: PortOptionProps) -> Element {
    let mut state = use_context::<AppState>();
    let port = props.port.clone();

    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 4px; margin-right: 12px; white-space: nowrap;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| state.toggle_port(&port),
            }
            "{props.port}"
        }
    }
}

/// Port checkboxes plus a button to clear them all.
#[component]
pub fn PortSelector() -> Element {
    let mut state = use_context::<AppState>();
    let ports = state.port_options.read().clone();
    let selected = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.ports.clone())
        .unwrap_or_default();
    let none_selected = selected.is_empty();

    let on_clear = move |_| {
        state.dispatch(SelectionChange::new().ports(Vec::<String>::new()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 4px;",
                span { style: "font-weight: bold;", "Select ports:" }
                button {
                    disabled: none_selected,
                    onclick: on_clear,
                    "Clear"
                }
            }
            div {
                style: "display: flex; flex-wrap: wrap; max-height: 120px; overflow-y: auto; padding: 4px; border: 1px solid #ddd; border-radius: 4px;",
                for port in ports.iter() {
                    PortOption {
                        key: "{port}",
                        port: port.clone(),
                        checked: selected.contains(port),
                    }
                }
            }
        }
    }
}
