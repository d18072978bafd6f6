//! Year input with stepper buttons
//!
//! The text box keeps whatever the user typed. Only text that parses to a
//! year inside `[Year::MIN, Year::MAX]` is forwarded; an empty box forwards
//! `None`. Any other text is rejected, which drops a year edit that is still
//! waiting to commit. Out-of-range numbers are clamped when the box loses focus.

use crate::components::button::ChromelessButton;
use crate::components::icons::{ChevronDownIcon, ChevronUpIcon};
use dioxus::prelude::*;
use shelf_core::Year;

/// What a piece of typed text means for the input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum YearText {
    Empty,
    Valid(Year),
    /// A number outside the allowed range
    OutOfRange(i64),
    /// Not a number at all
    Invalid,
}

pub(crate) fn classify(text: &str) -> YearText {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return YearText::Empty;
    }
    match trimmed.parse::<i64>() {
        Ok(n) => match Year::new(n) {
            Ok(year) => YearText::Valid(year),
            Err(_) => YearText::OutOfRange(n),
        },
        Err(_) => YearText::Invalid,
    }
}

/// What typing `text` hands to the filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forward {
    Commit(Option<Year>),
    Reject,
}

pub fn forwarded(text: &str) -> Forward {
    match classify(text) {
        YearText::Empty => Forward::Commit(None),
        YearText::Valid(year) => Forward::Commit(Some(year)),
        YearText::OutOfRange(_) | YearText::Invalid => Forward::Reject,
    }
}

fn display(value: Option<Year>) -> String {
    value.map(|year| year.to_string()).unwrap_or_default()
}

/// Step `current` by `delta`, starting from the lower bound when empty
pub(crate) fn step(current: Option<Year>, delta: i64) -> Year {
    match current {
        Some(year) => Year::clamped(i64::from(year.get()) + delta),
        None => Year::MIN,
    }
}

#[component]
pub fn NumberInput(
    label: String,
    /// Committed value; the box re-syncs when this changes to something the
    /// text doesn't already show
    value: ReadSignal<Option<Year>>,
    on_change: EventHandler<Option<Year>>,
    /// Typed text that cannot be forwarded
    #[props(default)]
    on_reject: Option<EventHandler<()>>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    let mut text = use_signal(|| display(*value.peek()));

    use_effect(move || {
        let committed = value();
        let shown = classify(&text.peek());
        let in_sync = match shown {
            YearText::Valid(year) => Some(year) == committed,
            YearText::Empty => committed.is_none(),
            YearText::OutOfRange(_) | YearText::Invalid => false,
        };
        if !in_sync {
            text.set(display(committed));
        }
    });

    let invalid = matches!(classify(&text()), YearText::OutOfRange(_) | YearText::Invalid);
    let border_class = if invalid {
        "ring-1 ring-red-500/60"
    } else {
        "focus-within:ring-1 focus-within:ring-indigo-500/50"
    };

    let mut apply_step = move |delta: i64| {
        let current = match classify(&text.peek()) {
            YearText::Valid(year) => Some(year),
            YearText::OutOfRange(n) => Some(Year::clamped(n)),
            YearText::Empty | YearText::Invalid => None,
        };
        let next = step(current, delta);
        text.set(next.to_string());
        on_change.call(Some(next));
    };

    rsx! {
        label { class: "flex flex-col gap-1 min-w-0",
            span { class: "text-xs font-medium text-gray-400", "{label}" }
            div { class: "flex items-center rounded-lg bg-gray-800/50 {border_class}",
                input {
                    r#type: "text",
                    inputmode: "numeric",
                    class: "w-full min-w-0 bg-transparent px-2.5 py-1.5 text-sm text-gray-300 placeholder-gray-500 focus:outline-none disabled:opacity-50",
                    value: "{text}",
                    placeholder: placeholder.as_deref(),
                    disabled,
                    aria_invalid: if invalid { Some("true") } else { None },
                    oninput: move |e| {
                        let typed = e.value();
                        match forwarded(&typed) {
                            Forward::Commit(year) => on_change.call(year),
                            Forward::Reject => {
                                if let Some(handler) = on_reject {
                                    handler.call(());
                                }
                            }
                        }
                        text.set(typed);
                    },
                    onblur: move |_| {
                        let classified = classify(&text.peek());
                        match classified {
                            YearText::OutOfRange(n) => {
                                let year = Year::clamped(n);
                                text.set(year.to_string());
                                on_change.call(Some(year));
                            }
                            YearText::Invalid => text.set(display(*value.peek())),
                            YearText::Empty | YearText::Valid(_) => {}
                        }
                    },
                    onkeydown: move |e: KeyboardEvent| match e.key() {
                        Key::ArrowUp => {
                            e.prevent_default();
                            apply_step(1);
                        }
                        Key::ArrowDown => {
                            e.prevent_default();
                            apply_step(-1);
                        }
                        _ => {}
                    },
                }
                div { class: "flex flex-col border-l border-gray-700",
                    ChromelessButton {
                        class: Some("px-1 text-gray-400 hover:text-white".to_string()),
                        aria_label: Some("Increment".to_string()),
                        disabled,
                        keep_focus: true,
                        onclick: move |_| apply_step(1),
                        ChevronUpIcon { class: "w-3 h-3" }
                    }
                    ChromelessButton {
                        class: Some("px-1 text-gray-400 hover:text-white".to_string()),
                        aria_label: Some("Decrement".to_string()),
                        disabled,
                        keep_focus: true,
                        onclick: move |_| apply_step(-1),
                        ChevronDownIcon { class: "w-3 h-3" }
                    }
                }
            }
        }
    }
}
