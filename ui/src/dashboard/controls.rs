//! Filter controls: multi-select chips for genres/ratings and the paired
//! year-range slider. These own no data; they only mutate the selection
//! signals handed to them by the dashboard view.

use dioxus::prelude::*;

#[component]
pub fn FilterChips(label: String, options: Vec<String>, selected: Signal<Vec<String>>) -> Element {
    let current = selected();

    rsx! {
        div { class: "filter-group",
            span { class: "filter-group__label", "{label}" }
            div { class: "filter-chips",
                for option in options.into_iter() {
                    {render_chip(option, &current, selected)}
                }
            }
        }
    }
}

fn render_chip(option: String, current: &[String], selected: Signal<Vec<String>>) -> Element {
    let is_active = current.iter().any(|value| value == &option);
    let value = option.clone();
    let mut selected = selected;

    rsx! {
        button {
            r#type: "button",
            class: format!("chip {}", if is_active { "chip--active" } else { "" }),
            onclick: move |_| {
                selected.with_mut(|values| {
                    if let Some(position) = values.iter().position(|v| v == &value) {
                        values.remove(position);
                    } else {
                        values.push(value.clone());
                    }
                });
            },
            "{option}"
        }
    }
}

/// Two range inputs forming the half-open `[lo, hi)` release-year window.
/// Each thumb clamps against the other so the pair stays ordered.
#[component]
pub fn YearRangeSlider(bounds: (u16, u16), range: Signal<(u16, u16)>) -> Element {
    let (min, max) = bounds;
    let (lo, hi) = range();
    let mut lo_signal = range;
    let mut hi_signal = range;

    rsx! {
        div { class: "year-slider",
            span { class: "filter-group__label", "Years" }
            div { class: "year-slider__inputs",
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    value: "{lo}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u16>() {
                            lo_signal.with_mut(|window| window.0 = value.min(window.1));
                        }
                    },
                }
                input {
                    r#type: "range",
                    min: "{min}",
                    max: "{max}",
                    value: "{hi}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u16>() {
                            hi_signal.with_mut(|window| window.1 = value.max(window.0));
                        }
                    },
                }
            }
            span { class: "year-slider__window", "{lo} to {hi} (exclusive)" }
        }
    }
}
