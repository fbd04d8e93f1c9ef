//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod country_selector;
mod error_display;
mod indicator_selector;
mod loading_spinner;
mod panel_view;
mod section_header;
mod sidebar;
mod source_links;

pub use chart_container::ChartContainer;
pub use country_selector::CountrySelector;
pub use error_display::ErrorDisplay;
pub use indicator_selector::IndicatorSelector;
pub use loading_spinner::LoadingSpinner;
pub use panel_view::PanelView;
pub use section_header::SectionHeader;
pub use sidebar::Sidebar;
pub use source_links::SourceLinks;
