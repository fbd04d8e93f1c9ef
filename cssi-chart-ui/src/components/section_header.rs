//! Heading and intro text above a chart section.

use crate::styles;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    #[props(!optional)]
    pub heading: Option<&'static str>,
    #[props(!optional)]
    pub intro: Option<&'static str>,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        if let Some(heading) = props.heading {
            h3 {
                style: styles::CENTRE_TEXT,
                "{heading}"
            }
        }
        if let Some(intro) = props.intro {
            p {
                style: styles::CENTRE_TEXT,
                "{intro}"
            }
        }
    }
}
