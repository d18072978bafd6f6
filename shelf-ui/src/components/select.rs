//! Searchable select
//!
//! A text box that filters a list of options, with an inline clear button
//! and a loading indicator. Search text is either owned by the select
//! (options are matched locally) or handed to the caller through
//! `search_value`/`on_search_change` (options arrive already matched).
//!
//! ```ignore
//! SearchableSelect {
//!     label: "Genre",
//!     options: genres,
//!     value: genre_id,
//!     clearable: true,
//!     on_change: move |id: Option<String>| { ... },
//! }
//! ```

use crate::components::button::ChromelessButton;
use crate::components::helpers::InlineSpinner;
use crate::components::icons::{CheckIcon, ChevronDownIcon, XIcon};
use dioxus::prelude::*;
use shelf_core::SelectOption;

/// Options whose label contains `query` (case-insensitive), at most `limit`
pub fn filter_options(options: &[SelectOption], query: &str, limit: usize) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .take(limit)
        .cloned()
        .collect()
}

/// Label for `id` from the options, else from the last pick made here
fn resolve_label(
    options: &[SelectOption],
    picked: Option<&(String, String)>,
    id: &str,
) -> Option<String> {
    options
        .iter()
        .find(|option| option.value == id)
        .map(|option| option.label.clone())
        .or_else(|| {
            picked
                .filter(|(value, _)| value == id)
                .map(|(_, label)| label.clone())
        })
}

#[component]
pub fn SearchableSelect(
    options: Vec<SelectOption>,
    /// Selected option value
    value: ReadSignal<Option<String>>,
    on_change: EventHandler<Option<String>>,
    #[props(default)] label: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] clearable: bool,
    #[props(default)] disabled: bool,
    /// Show a spinner in place of the chevron
    #[props(default)]
    loading: bool,
    #[props(default = usize::MAX)] limit: usize,
    /// Caller-owned search text
    #[props(default)]
    search_value: Option<String>,
    #[props(default)] on_search_change: Option<EventHandler<String>>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let mut local_query = use_signal(String::new);
    // Label of the last pick, for when the option list no longer holds it
    let mut picked_label = use_signal(|| None::<(String, String)>);

    let selected = value();
    let selected_label = selected
        .as_deref()
        .and_then(|id| resolve_label(&options, picked_label.read().as_ref(), id));

    let controlled = on_search_change.is_some();
    let query = match &search_value {
        Some(term) if controlled => term.clone(),
        _ => local_query(),
    };
    let visible = if controlled {
        options.iter().take(limit).cloned().collect()
    } else {
        filter_options(&options, &query, limit)
    };

    let open = is_open() && !disabled;
    let shown_text = if open {
        query.clone()
    } else {
        selected_label.clone().unwrap_or_default()
    };
    let show_clear = clearable && selected.is_some() && !disabled;

    let mut set_query = move |text: String| match on_search_change {
        Some(handler) => handler.call(text),
        None => local_query.set(text),
    };

    let first_visible = visible.first().cloned();

    let mut pick = move |option: SelectOption| {
        on_change.call(Some(option.value.clone()));
        picked_label.set(Some((option.value, option.label)));
        is_open.set(false);
    };

    rsx! {
        div { class: "relative flex flex-col gap-1 min-w-0",
            if let Some(label) = &label {
                span { class: "text-xs font-medium text-gray-400", "{label}" }
            }
            div { class: "flex items-center rounded-lg bg-gray-800/50 focus-within:ring-1 focus-within:ring-indigo-500/50",
                input {
                    r#type: "text",
                    role: "combobox",
                    aria_expanded: if open { "true" } else { "false" },
                    aria_label: label.as_deref(),
                    class: "w-full min-w-0 bg-transparent px-2.5 py-1.5 text-sm text-gray-300 placeholder-gray-500 focus:outline-none disabled:opacity-50 disabled:cursor-not-allowed",
                    value: "{shown_text}",
                    placeholder: placeholder.as_deref(),
                    disabled,
                    onfocus: move |_| is_open.set(true),
                    onblur: move |_| is_open.set(false),
                    oninput: move |e| {
                        is_open.set(true);
                        set_query(e.value());
                    },
                    onkeydown: move |e: KeyboardEvent| match e.key() {
                        Key::Escape => is_open.set(false),
                        Key::Enter => {
                            if let Some(option) = first_visible.clone() {
                                pick(option);
                            }
                        }
                        _ => {}
                    },
                }
                div { class: "flex items-center pr-2 text-gray-400",
                    if loading {
                        InlineSpinner {}
                    } else if show_clear {
                        ChromelessButton {
                            class: Some("hover:text-white".to_string()),
                            aria_label: Some("Clear".to_string()),
                            keep_focus: true,
                            onclick: move |_| {
                                if !controlled {
                                    local_query.set(String::new());
                                }
                                on_change.call(None);
                            },
                            XIcon { class: "w-3.5 h-3.5" }
                        }
                    } else {
                        ChevronDownIcon { class: "w-3.5 h-3.5" }
                    }
                }
            }

            if open && !visible.is_empty() {
                div {
                    role: "listbox",
                    class: "absolute top-full left-0 right-0 z-20 mt-1 max-h-64 overflow-y-auto bg-gray-900 rounded-lg shadow-xl border border-white/5 p-1",
                    for option in visible {
                        SelectRow {
                            key: "{option.value}",
                            is_selected: selected.as_deref() == Some(option.value.as_str()),
                            option: option.clone(),
                            on_pick: pick,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SelectRow(
    is_selected: bool,
    option: SelectOption,
    on_pick: EventHandler<SelectOption>,
) -> Element {
    let label = option.label.clone();
    rsx! {
        div {
            role: "option",
            aria_selected: if is_selected { "true" } else { "false" },
            class: "w-full text-left px-2.5 py-1.5 text-xs rounded cursor-pointer flex items-center gap-2 {row_class(is_selected)}",
            // mousedown fires before the input's blur closes the list
            onmousedown: move |e: MouseEvent| {
                e.prevent_default();
                on_pick.call(option.clone());
            },
            if is_selected {
                CheckIcon { class: "w-3.5 h-3.5 text-indigo-400 flex-shrink-0" }
            } else {
                span { class: "w-3.5 h-3.5 flex-shrink-0" }
            }
            "{label}"
        }
    }
}

fn row_class(is_selected: bool) -> &'static str {
    if is_selected {
        "text-white bg-gray-700/50"
    } else {
        "text-gray-200 hover:bg-gray-700 hover:text-white"
    }
}
