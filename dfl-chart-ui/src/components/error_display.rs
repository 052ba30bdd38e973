//! Load failure panel.

use dioxus::prelude::*;

/// Columns a landings CSV must carry, shown with load failures.
pub const REQUIRED_COLUMNS_HINT: &str =
    "The landings file needs the columns År, Art and Landingsplads.";

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// What the user can do about it, shown under the message
    #[props(default)]
    pub hint: Option<String>,
}

/// Replaces the pickers and charts when the dataset could not be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        section {
            role: "alert",
            style: "max-width: 720px; margin: 24px 0; padding: 16px 20px; border-left: 4px solid #C62828; background: #FFF5F5;",
            h3 {
                style: "margin: 0 0 8px 0; color: #C62828; font-size: 16px;",
                "No landings to show"
            }
            code {
                style: "display: block; white-space: pre-wrap; font-size: 13px; color: #333;",
                "{props.message}"
            }
            if let Some(hint) = props.hint.as_ref() {
                p {
                    style: "margin: 8px 0 0 0; font-size: 13px; color: #666;",
                    "{hint}"
                }
            }
        }
    }
}
