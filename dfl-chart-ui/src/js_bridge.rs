//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize data and call those globals.

use serde::Serialize;
use wasm_bindgen::JsValue;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LANDINGS_MAP_JS: &str = include_str!("../assets/js/landings-map.js");
static PORT_SERIES_CHART_JS: &str = include_str!("../assets/js/port-series-chart.js");

/// Functions the chart scripts define, promoted to `window` once evaluated.
const CHART_FUNCTIONS: [&str; 6] = [
    "renderLandingsMap",
    "renderPortSeries",
    "destroyChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Landings JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log_js_error("call_js", &e);
    }
}

fn log_js_error(context: &str, err: &JsValue) {
    log::warn!("[Landings] js_bridge: {} failed: {:?}", context, err);
}

/// Serialize a value for hand-off to JS. Logs and yields `null` on failure.
pub fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("[Landings] js_bridge: Failed to serialize chart payload: {}", e);
            "null".to_string()
        }
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at startup.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// ready, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, LANDINGS_MAP_JS, PORT_SERIES_CHART_JS].join("\n");
    let store_js = format!("window.__landingsChartScripts = {};", to_json(&all_js));
    if let Err(e) = js_sys::eval(&store_js) {
        log_js_error("store chart scripts", &e);
        return;
    }

    let promote: String = CHART_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};\n"))
        .collect();
    let init_js = format!(
        r#"
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__landingsChartScripts);
                    delete window.__landingsChartScripts;
                    {promote}
                    window.__landingsChartsReady = true;
                    console.log('Landings charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    if let Err(e) = js_sys::eval(&init_js) {
        log_js_error("init_charts", &e);
    }
}

/// Pending render polls, one per container, keyed by container id.
const PENDING_RENDERS: &str = "window.__landingsPendingRenders";

/// JS that cancels the pending render poll for a container, if any.
fn cancel_script(container_id: &str) -> String {
    let container = to_json(&container_id);
    format!(
        "var pending = {PENDING_RENDERS} || ({PENDING_RENDERS} = {{}}); \
         if (pending[{container}]) {{ clearInterval(pending[{container}]); delete pending[{container}]; }}"
    )
}

/// JS that calls a chart function once D3, the chart scripts and the
/// container are all ready.
///
/// A newer request for the same container cancels the older poll, and a poll
/// that is no longer the registered one never draws.
fn render_script(function: &str, container_id: &str, data_json: &str, config_json: &str) -> String {
    let container = to_json(&container_id);
    let data = to_json(&data_json);
    let config = to_json(&config_json);
    let cancel = cancel_script(container_id);
    format!(
        r#"
        (function() {{
            {cancel}
            var poll = setInterval(function() {{
                if (pending[{container}] !== poll) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__landingsChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    delete pending[{container}];
                    try {{
                        window.{function}({container}, {data}, {config});
                    }} catch(e) {{ console.error('[Landings] {function} error:', e); }}
                }}
            }}, 100);
            pending[{container}] = poll;
        }})();
        "#,
    )
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_script(function, container_id, data_json, config_json));
}

/// Render landing markers on the map. `data_json` is the serialized map model.
pub fn render_landings_map(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[Landings] js_bridge: render_landings_map into {}", container_id);
    render_when_ready("renderLandingsMap", container_id, data_json, config_json);
}

/// Render one line per port. `data_json` is the serialized series model.
pub fn render_port_series(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("[Landings] js_bridge: render_port_series into {}", container_id);
    render_when_ready("renderPortSeries", container_id, data_json, config_json);
}

/// Clear a chart container and drop any render still waiting for it.
/// A container not yet mounted is left alone.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!("(function() {{ {} }})();", cancel_script(container_id)));
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_cancels_the_previous_request_for_its_container() {
        let script = render_script("renderLandingsMap", "landings-map", "{}", "{}");
        let cancel = script.find("clearInterval(pending[\"landings-map\"])").unwrap();
        let schedule = script.find("setInterval(").unwrap();
        let register = script.find("pending[\"landings-map\"] = poll;").unwrap();
        assert!(cancel < schedule && schedule < register);
    }

    #[test]
    fn superseded_poll_never_draws() {
        let script = render_script("renderLandingsMap", "landings-map", "{}", "{}");
        let guard = script.find("if (pending[\"landings-map\"] !== poll)").unwrap();
        let draw = script.find("window.renderLandingsMap(").unwrap();
        assert!(guard < draw);
    }

    #[test]
    fn payloads_are_passed_as_js_strings() {
        let script = render_script("renderPortSeries", "landings-series", r#"{"Skagen":[]}"#, "{}");
        assert!(script.contains(r#"window.renderPortSeries("landings-series", "{\"Skagen\":[]}", "{}")"#));
    }

    #[test]
    fn cancel_only_touches_its_container() {
        let script = cancel_script("landings-series");
        assert!(script.contains("pending[\"landings-series\"]"));
        assert!(!script.contains("landings-map"));
    }
}
