//! Multi-select of countries for the compare chart.

use crate::state::AppState;
use cssi_view::ControlId;
use dioxus::prelude::*;

/// Checkbox list of every country in the dataset.
/// An empty selection means "all countries".
#[component]
pub fn CountrySelector(control: ControlId) -> Element {
    let state = use_context::<AppState>();
    let countries: Vec<String> = match state.dataset.read().as_ref() {
        Some(dataset) => dataset.countries().map(str::to_string).collect(),
        None => Vec::new(),
    };
    let chosen: Vec<String> = state.value(control).countries().to_vec();
    let prompt = control.prompt();

    rsx! {
        div {
            style: "margin: 8px 0;",
            p {
                style: "margin-bottom: 4px;",
                "{prompt}"
            }
            div {
                id: control.id(),
                style: "display: flex; flex-wrap: wrap; gap: 4px 16px;",
                for country in countries.into_iter() {
                    CountryCheckbox {
                        control: control,
                        checked: chosen.contains(&country),
                        chosen: chosen.clone(),
                        country: country,
                    }
                }
            }
        }
    }
}

#[component]
fn CountryCheckbox(control: ControlId, country: String, checked: bool, chosen: Vec<String>) -> Element {
    let mut state = use_context::<AppState>();
    let toggled = country.clone();

    let on_change = move |_: Event<FormData>| {
        let mut next: Vec<String> = chosen.iter().filter(|c| **c != toggled).cloned().collect();
        if !checked {
            next.push(toggled.clone());
        }
        state.select(control, &next);
    };

    rsx! {
        label {
            style: "font-weight: normal;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: on_change,
            }
            " {country}"
        }
    }
}
