//! Chart container component with a placeholder slot.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// CSS height of the chart area, e.g. "70vh" or "420px"
    #[props(default = "400px".to_string())]
    pub height: String,
    /// Text shown over the empty chart area instead of a chart
    #[props(default)]
    pub notice: Option<String>,
}

/// A container div for D3.js charts. The chart div stays mounted while a
/// notice is shown so the next render finds its target.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            if let Some(notice) = props.notice.as_ref() {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666; font-style: italic;",
                    "{notice}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
