//! Labelled on/off switch

use dioxus::prelude::*;

/// One switch row: label on the left, switch on the right
#[component]
pub fn Switch(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] disabled: bool,
) -> Element {
    let track_class = if checked {
        "bg-indigo-600"
    } else {
        "bg-gray-700"
    };
    let knob_class = if checked {
        "translate-x-4"
    } else {
        "translate-x-0"
    };

    rsx! {
        div { class: "flex items-center justify-between gap-4",
            span { class: "text-sm text-gray-300", "{label}" }
            button {
                r#type: "button",
                role: "switch",
                aria_checked: if checked { "true" } else { "false" },
                aria_label: "{label}",
                disabled,
                class: "relative inline-flex h-5 w-9 flex-shrink-0 items-center rounded-full transition-colors disabled:opacity-50 disabled:cursor-not-allowed {track_class}",
                onclick: move |_| {
                    if !disabled {
                        on_change.call(!checked);
                    }
                },
                span { class: "inline-block h-4 w-4 ml-0.5 rounded-full bg-white shadow transition-transform {knob_class}" }
            }
        }
    }
}
