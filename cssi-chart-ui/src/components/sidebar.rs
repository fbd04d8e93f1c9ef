//! Fixed sidebar with the dashboard title and navigation pills.

use crate::state::AppState;
use crate::styles;
use cssi_view::panel::{NavEntry, NAVIGATION, SIDEBAR_TAGLINE, SIDEBAR_TITLE};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        div {
            style: styles::SIDEBAR,
            h2 {
                style: styles::CENTRE_TEXT,
                "{SIDEBAR_TITLE}"
            }
            hr {}
            p {
                class: "lead",
                style: styles::CENTRE_TEXT,
                "{SIDEBAR_TAGLINE}"
            }
            hr {}
            nav {
                for entry in NAVIGATION {
                    NavLink { entry: entry }
                    br {}
                }
            }
        }
    }
}

/// A pill link; highlighted when its href is exactly the current path.
#[component]
fn NavLink(entry: NavEntry) -> Element {
    let mut state = use_context::<AppState>();
    let active = *state.path.read() == entry.href;
    let pill_style = if active { styles::PILL_ACTIVE } else { styles::PILL };

    let on_click = move |evt: Event<MouseData>| {
        evt.prevent_default();
        state.navigate(entry.href);
    };

    rsx! {
        a {
            href: entry.href,
            style: pill_style,
            onclick: on_click,
            "{entry.label}"
        }
    }
}
