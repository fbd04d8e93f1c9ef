//! Dropdown selector for a single-choice indicator control.

use crate::state::AppState;
use cssi_view::ControlId;
use dioxus::prelude::*;

/// Indicator dropdown.
/// Lists the control's options and routes changes through the binder.
#[component]
pub fn IndicatorSelector(control: ControlId) -> Element {
    let mut state = use_context::<AppState>();
    let options = match state.dataset.read().as_ref() {
        Some(dataset) => control.options(dataset),
        None => Vec::new(),
    };
    let selected = state
        .value(control)
        .indicator()
        .map(|i| i.column().to_string())
        .unwrap_or_default();
    let prompt = control.prompt();

    let on_change = move |evt: Event<FormData>| {
        state.select(control, &[evt.value()]);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: control.id(),
                style: "display: block; margin-bottom: 4px;",
                "{prompt}"
            }
            select {
                id: control.id(),
                class: "form-control",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_empty(),
                    "--"
                }
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
