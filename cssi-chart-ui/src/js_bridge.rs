//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes [`ChartSpec`]s and calls those globals.

use cssi_view::{ChartKind, ChartSpec, RenderedChart};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CSSI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is available, then each render function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BAR_CHART_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!(
        "window.__cssiChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__cssiChartScripts);
                    delete window.__cssiChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cssiChartsReady = true;
                    console.log('CSSI charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render one chart spec into the container with the given DOM id.
///
/// Polls until D3, the chart scripts and the container element are all
/// available, then calls the bar or scatter renderer.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let function = match spec.kind {
        ChartKind::Bar => "renderBarChart",
        ChartKind::Scatter => "renderScatterChart",
    };
    let spec_arg = spec_literal(spec);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cssiChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {spec_arg});
                    }} catch(e) {{ console.error('[CSSI] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Spec JSON as a JS string literal, for `JSON.parse` on the other side.
///
/// Encoding the JSON text a second time quotes and escapes everything in it,
/// country names included, so nothing from the dataset reaches `eval` as code.
fn spec_literal(spec: &ChartSpec) -> String {
    let spec_json = serde_json::to_string(spec).unwrap_or_default();
    serde_json::to_string(&spec_json).unwrap_or_else(|_| "'{}'".to_string())
}

/// Render every chart returned by a binder mount or update.
pub fn render_charts(charts: &[RenderedChart]) {
    for rendered in charts {
        render_chart(rendered.chart.id(), &rendered.spec);
    }
}

/// Path of the current browser location, `/` if unavailable.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push `path` onto the browser history without reloading.
pub fn push_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
            log::warn!("[CSSI] pushState to {} failed: {:?}", path, e);
        }
    }
}

/// Reload on back/forward so the app re-reads the location.
pub fn reload_on_history_change() {
    call_js("window.addEventListener('popstate', function() { window.location.reload(); });");
}
