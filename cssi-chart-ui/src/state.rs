//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The dashboard's reactive graph is explicit: panel mounts and control
//! events go through the [`Binder`] held here, and only the charts it returns
//! are handed to D3.js.

use crate::js_bridge;
use cssi_core::Dataset;
use cssi_view::{route, Binder, ControlId, ControlValue};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Validated dataset (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current location path, drives which panel is shown
    pub path: Signal<String>,
    /// Selection state of the mounted panel
    pub binder: Signal<Option<Binder>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            path: Signal::new("/".to_string()),
            binder: Signal::new(None),
        }
    }

    /// Switch to the panel at `path` and record it in browser history.
    pub fn navigate(&mut self, path: &str) {
        if *self.path.peek() == path {
            return;
        }
        js_bridge::push_path(path);
        self.path.set(path.to_string());
    }

    /// Mount the panel for the current path: controls reset to defaults and
    /// every chart on it is drawn once.
    pub fn mount_panel(&mut self, dataset: &Dataset) {
        let path = self.path.peek().clone();
        let (binder, charts) = Binder::mount(route(&path), dataset);
        self.binder.set(Some(binder));
        // A rejection on the previous panel no longer applies.
        self.error_msg.set(None);
        js_bridge::render_charts(&charts);
    }

    /// Apply raw values from a control and redraw the charts depending on it.
    pub fn select(&mut self, control: ControlId, raw: &[String]) {
        let Some(dataset) = self.dataset.peek().clone() else {
            return;
        };
        let result = {
            let mut binder = self.binder.write();
            match binder.as_mut() {
                Some(binder) => binder.update_raw(control, raw, &dataset),
                None => return,
            }
        };
        match result {
            Ok(charts) => {
                self.error_msg.set(None);
                js_bridge::render_charts(&charts);
            }
            Err(e) => {
                log::warn!("[CSSI] Rejected value for {}: {}", control.id(), e);
                self.error_msg.set(Some(e.to_string()));
            }
        }
    }

    /// Current value of `control` on the mounted panel.
    pub fn value(&self, control: ControlId) -> ControlValue {
        match self.binder.read().as_ref() {
            Some(binder) => binder.value(control),
            None => control.default_value(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
