//! Mount point for one D3.js chart.

use cssi_view::ChartId;
use dioxus::prelude::*;

/// Matches the SVG height drawn by `renderBarChart`/`renderScatterChart`,
/// so the page does not jump when a chart is drawn.
const CHART_HEIGHT_PX: u32 = 420;

/// Empty div that D3 draws `chart` into; its DOM id is the chart id.
#[component]
pub fn ChartContainer(chart: ChartId) -> Element {
    let id = chart.id();
    rsx! {
        div {
            id: id,
            class: "cssi-chart",
            style: "min-height: {CHART_HEIGHT_PX}px; width: 100%;",
        }
    }
}
