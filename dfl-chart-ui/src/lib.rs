//! Shared Dioxus components and D3.js bridge for landings chart apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `chart_config`: serialisable render settings handed to D3 with the data
//! - `state`: Reactive AppState with Dioxus Signals, driven by a `dfl_view::Controller`
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod chart_config;
pub mod components;
pub mod js_bridge;
pub mod state;
