//! Data source attribution links.

use crate::styles;
use cssi_view::panel::SourceLink;
use dioxus::prelude::*;

/// Blurb followed by one link per source, each opening in a new tab.
#[component]
pub fn SourceLinks(blurb: &'static str, sources: Vec<SourceLink>) -> Element {
    rsx! {
        p { "{blurb}" }
        for source in sources {
            a {
                href: source.href,
                target: "_blank",
                rel: "noopener noreferrer",
                style: styles::LINK,
                "{source.label}"
            }
            br {}
            br {}
        }
    }
}
