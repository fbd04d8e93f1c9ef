//! COVID-19 and Sustainability Dashboard
//!
//! Three routed panels (`/`, `/sustainability`, `/covidsustainability`)
//! charting Worldometers COVID-19 totals against Sustainable Society Index
//! scores, plus a not-found panel for any other path.
//!
//! Data flow:
//! 1. The dataset CSV is embedded in `cssi-core` and validated against the
//!    indicator vocabulary once, on mount.
//! 2. Whenever the path changes, the panel is mounted through a fresh
//!    `Binder`: controls take their defaults and every chart is drawn.
//! 3. Each control change goes through `AppState::select`, which redraws
//!    only the charts bound to that control.

use cssi_chart_ui::components::{ErrorDisplay, LoadingSpinner, PanelView, Sidebar};
use cssi_chart_ui::js_bridge;
use cssi_chart_ui::state::AppState;
use cssi_chart_ui::styles;
use cssi_core::Dataset;
use cssi_view::Panel;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load and validate the dataset once on mount ───
    use_effect(move || {
        match Dataset::embedded() {
            Ok(dataset) => {
                log::info!("[CSSI] Loaded dataset with {} countries", dataset.row_count());
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                log::error!("Failed to load dataset: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load dataset: {}", e)));
            }
        }
        state.path.set(js_bridge::current_path());
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
        js_bridge::reload_on_history_change();
    });

    // ─── Effect 2: Mount the panel for the current path ───
    // Re-runs whenever the path or the dataset changes.
    use_effect(move || {
        let _path = (state.path)();
        let dataset = match &*state.dataset.read() {
            Some(dataset) => dataset.clone(),
            None => return,
        };
        state.mount_panel(&dataset);
    });

    let panel = Panel::for_path(&state.path.read());
    let title = cssi_view::panel::APP_TITLE;

    // ─── Render ───
    rsx! {
        document::Title { "{title}" }
        Sidebar {}
        div {
            id: "page-content",
            style: styles::CONTENT,

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.dataset.read().is_some() {
                PanelView { panel: panel }
            }
        }
    }
}
