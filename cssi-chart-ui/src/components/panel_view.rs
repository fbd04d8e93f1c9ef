//! Renders a routed [`Panel`]: sections of controls and chart containers,
//! or the not-found message.

use crate::components::{
    ChartContainer, CountrySelector, IndicatorSelector, SectionHeader, SourceLinks,
};
use crate::styles;
use cssi_view::panel::Section;
use cssi_view::Panel;
use dioxus::prelude::*;

#[component]
pub fn PanelView(panel: Panel) -> Element {
    if panel.is_not_found() {
        let message = panel.message.clone().unwrap_or_default();
        return rsx! {
            div {
                class: "jumbotron",
                h1 {
                    class: "text-danger",
                    "{panel.title}"
                }
                hr {}
                p { "{message}" }
            }
        };
    }

    rsx! {
        h1 {
            style: styles::CENTRE_TEXT,
            "{panel.title}"
        }
        hr {}
        if let Some(intro) = panel.intro {
            p {
                style: styles::CENTRE_TEXT,
                "{intro}"
            }
            hr {}
        }
        for section in panel.sections.iter().cloned() {
            SectionView { section: section }
        }
        if let Some(blurb) = panel.sources_blurb {
            SourceLinks { blurb: blurb, sources: panel.sources.clone() }
        }
    }
}

#[component]
fn SectionView(section: Section) -> Element {
    rsx! {
        SectionHeader { heading: section.heading, intro: section.intro }
        for control in section.controls.iter().copied() {
            if control.is_multi() {
                CountrySelector { control: control }
            } else {
                IndicatorSelector { control: control }
            }
        }
        ChartContainer { chart: section.chart }
        p {
            style: styles::CENTRE_TEXT,
            "{section.caption}"
        }
        if let Some(note) = section.note {
            p {
                style: styles::CENTRE_TEXT,
                "{note}"
            }
        }
        hr {}
    }
}
