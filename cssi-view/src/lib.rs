//! View layer of the COVID-19 & Sustainability dashboard.
//!
//! - [`chart`]: pure builders turning a selection into a [`ChartSpec`]
//! - [`control`]: dropdowns, their option lists and value validation
//! - [`panel`]: path routing and the fixed panel layouts
//! - [`binder`]: the control → chart dependency table and the per-panel
//!   selection state that drives recomputation
//!
//! Nothing here renders; the web app and the HTTP server both consume these
//! types as data.

pub mod binder;
pub mod chart;
pub mod control;
pub mod error;
pub mod panel;

#[cfg(test)]
mod test_support;

pub use binder::{build_chart, Binder, ChartId, RenderedChart, Selection};
pub use chart::{ChartKind, ChartSpec};
pub use control::{ControlId, ControlValue};
pub use error::ViewError;
pub use panel::{route, Panel, Route};
