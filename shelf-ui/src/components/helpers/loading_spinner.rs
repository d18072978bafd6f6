//! Loading spinner

use crate::components::icons::LoaderIcon;
use dioxus::prelude::*;

/// Small spinner for the right edge of an input
#[component]
pub fn InlineSpinner() -> Element {
    rsx! {
        span { role: "status", aria_label: "Loading",
            LoaderIcon { class: "w-4 h-4 text-gray-400 animate-spin" }
        }
    }
}
