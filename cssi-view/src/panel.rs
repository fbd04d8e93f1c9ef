//! Path routing and the fixed panel layouts.
//!
//! A panel is plain data: headings, text, which controls feed which chart,
//! and source links. The web app renders it; the HTTP API serves it as JSON.

use crate::binder::ChartId;
use crate::control::ControlId;
use serde::Serialize;

/// Browser tab title.
pub const APP_TITLE: &str = "COVID-19 and Sustainability";
pub const SIDEBAR_TITLE: &str = "COVID-19 and Sustainability Dashboard";
pub const SIDEBAR_TAGLINE: &str = "An interactive dashboard for COVID-19 and Sustainability data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "kebab-case")]
pub enum Route {
    Covid,
    Sustainability,
    CovidSustainability,
    NotFound(String),
}

/// Map a URL path to its route. Matching is exact.
pub fn route(path: &str) -> Route {
    match path {
        "/" => Route::Covid,
        "/sustainability" => Route::Sustainability,
        "/covidsustainability" => Route::CovidSustainability,
        other => Route::NotFound(other.to_string()),
    }
}

impl Route {
    pub fn path(&self) -> &str {
        match self {
            Route::Covid => "/",
            Route::Sustainability => "/sustainability",
            Route::CovidSustainability => "/covidsustainability",
            Route::NotFound(path) => path,
        }
    }

    /// Charts on this route, top to bottom.
    pub fn charts(&self) -> &'static [ChartId] {
        match self {
            Route::Covid => &[ChartId::CovidBar, ChartId::CountryCompareBar],
            Route::Sustainability => &[ChartId::WellbeingBar, ChartId::SsiScatter],
            Route::CovidSustainability => &[ChartId::CovidSsiScatter],
            Route::NotFound(_) => &[],
        }
    }

    /// Controls on this route, in display order.
    pub fn controls(&self) -> Vec<ControlId> {
        self.charts()
            .iter()
            .flat_map(|c| c.inputs().iter().copied())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// Sidebar navigation pills.
pub const NAVIGATION: [NavEntry; 3] = [
    NavEntry {
        label: "Cases and Fatalities",
        href: "/",
    },
    NavEntry {
        label: "Sustainability",
        href: "/sustainability",
    },
    NavEntry {
        label: "COVID-19 & Sustainability",
        href: "/covidsustainability",
    },
];

/// Attribution link, opened in a new browser tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const WORLDOMETERS: SourceLink = SourceLink {
    label: "Worldometers",
    href: "https://www.worldometers.info/coronavirus/#countries",
};

pub const SSI: SourceLink = SourceLink {
    label: "Sustainable Society Index",
    href: "https://ssi.wi.th-koeln.de/",
};

/// A chart with the controls that drive it and the text around it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub heading: Option<&'static str>,
    pub intro: Option<&'static str>,
    pub controls: &'static [ControlId],
    pub chart: ChartId,
    pub caption: &'static str,
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub route: Route,
    pub title: String,
    pub intro: Option<&'static str>,
    pub sections: Vec<Section>,
    /// Body text of the not-found panel.
    pub message: Option<String>,
    pub sources_blurb: Option<&'static str>,
    pub sources: Vec<SourceLink>,
}

impl Panel {
    pub fn for_path(path: &str) -> Panel {
        Self::for_route(route(path))
    }

    pub fn for_route(route: Route) -> Panel {
        match route {
            Route::Covid => Panel {
                title: "COVID-19 Cases, Deaths and Recoveries".to_string(),
                intro: None,
                sections: vec![
                    section(
                        ChartId::CovidBar,
                        None,
                        None,
                        "This graph compares Country (X) data with whatever is selected from the dropdown (Y). This can be Cases, Deaths or Recoveries.",
                        None,
                    ),
                    section(
                        ChartId::CountryCompareBar,
                        Some("COVID-19 Country Compare"),
                        Some("Use the graph below to compare countries of your choice:"),
                        "This graph allows you to compare COVID-19 data (Y) from countries (X) of your choice.",
                        None,
                    ),
                ],
                message: None,
                sources_blurb: Some("The data used in this section is sourced from Worldometers. You can access their work by clicking the link below:"),
                sources: vec![WORLDOMETERS],
                route,
            },
            Route::Sustainability => Panel {
                title: "Sustainability".to_string(),
                intro: Some("The purpose of this page is to investigate the sustainability of the countries studied in the COVID-19 section of the dashboard. Doing so can help understand the economic, human and environmental situations of those countries."),
                sections: vec![
                    section(
                        ChartId::WellbeingBar,
                        None,
                        None,
                        "This graph shows the SSI indicator scores (Y) of countries (X).",
                        Some("NOTE: The indicator Total Average GDP is calculated the average of the 3 main indicators, but using GDP instead of Economic Wellbeing."),
                    ),
                    section(
                        ChartId::SsiScatter,
                        Some("SSI Custom Scatter Graph"),
                        Some("Use the dropdowns below to select your indicators, and the graph will automatically update."),
                        "This graph allows you to choose two indicators from the SSI to see how a country performs in both of them. Countries towards the top-right score highly in both.",
                        None,
                    ),
                ],
                message: None,
                sources_blurb: Some("The data used in this section is sourced from the Sustainable Society Index (SSI). You can access their work by clicking the link below:"),
                sources: vec![SSI],
                route,
            },
            Route::CovidSustainability => Panel {
                title: "COVID 19 & Sustainability".to_string(),
                intro: Some("The purpose of this section is to link both sustainability and COVID-19 Data together. This can be used to analyse how sustainability factors can influence how a country has dealt with the pandemic."),
                sections: vec![section(
                    ChartId::CovidSsiScatter,
                    None,
                    None,
                    "This graph allows you to compare COVID-19 data (Y) against an SSI indicator (X). Countries scoring highly in both will be located at the top-right of the graph.",
                    None,
                )],
                message: None,
                sources_blurb: Some("The data used in this section is sourced from the Sustainable Society Index (SSI) and Worldometers. You can access their work by using the links below:"),
                sources: vec![SSI, WORLDOMETERS],
                route,
            },
            Route::NotFound(ref path) => Panel {
                title: "404: Not found".to_string(),
                intro: None,
                sections: Vec::new(),
                message: Some(format!("The pathname {} was not recognised...", path)),
                sources_blurb: None,
                sources: Vec::new(),
                route,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.route, Route::NotFound(_))
    }
}

fn section(
    chart: ChartId,
    heading: Option<&'static str>,
    intro: Option<&'static str>,
    caption: &'static str,
    note: Option<&'static str>,
) -> Section {
    Section {
        heading,
        intro,
        controls: chart.inputs(),
        chart,
        caption,
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_route_to_their_panels() {
        assert_eq!(route("/"), Route::Covid);
        assert_eq!(route("/sustainability"), Route::Sustainability);
        assert_eq!(route("/covidsustainability"), Route::CovidSustainability);
    }

    #[test]
    fn known_panels_are_distinct() {
        let a = Panel::for_path("/");
        let b = Panel::for_path("/sustainability");
        let c = Panel::for_path("/covidsustainability");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert!(!a.is_not_found() && !b.is_not_found() && !c.is_not_found());
    }

    #[test]
    fn unknown_path_echoes_the_path() {
        let panel = Panel::for_path("/xyz");
        assert!(panel.is_not_found());
        assert_eq!(panel.route, Route::NotFound("/xyz".to_string()));
        assert_eq!(panel.title, "404: Not found");
        assert!(panel.message.unwrap().contains("/xyz"));
        assert!(panel.sections.is_empty());
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(
            route("/sustainability/"),
            Route::NotFound("/sustainability/".to_string())
        );
        assert_eq!(route(""), Route::NotFound(String::new()));
        assert_eq!(route("/Sustainability"), Route::NotFound("/Sustainability".to_string()));
    }

    #[test]
    fn route_paths_round_trip() {
        for nav in NAVIGATION {
            assert_eq!(route(nav.href).path(), nav.href);
        }
        assert_eq!(Route::NotFound("/a/b".into()).path(), "/a/b");
    }

    #[test]
    fn sections_match_route_charts() {
        for nav in NAVIGATION {
            let panel = Panel::for_path(nav.href);
            let charts: Vec<ChartId> = panel.sections.iter().map(|s| s.chart).collect();
            assert_eq!(charts.as_slice(), panel.route.charts());
            for s in &panel.sections {
                assert_eq!(s.controls, s.chart.inputs());
            }
        }
    }

    #[test]
    fn covid_route_controls_in_display_order() {
        assert_eq!(
            Route::Covid.controls(),
            vec![
                ControlId::CovidMetric,
                ControlId::CompareCountries,
                ControlId::CompareMetric
            ]
        );
        assert!(Route::NotFound("/x".into()).controls().is_empty());
    }

    #[test]
    fn combined_panel_credits_both_sources() {
        let panel = Panel::for_route(Route::CovidSustainability);
        assert_eq!(panel.sources, vec![SSI, WORLDOMETERS]);
    }

    #[test]
    fn route_serializes_with_path() {
        let json = serde_json::to_value(Route::NotFound("/xyz".into())).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "not-found", "path": "/xyz"}));
        let json = serde_json::to_value(Route::Covid).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "covid"}));
    }
}
