//! Shared Dioxus components and D3.js bridge for the dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals and the mounted binder
//! - `components`: Reusable RSX components (sidebar, selectors, panels, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod styles;
