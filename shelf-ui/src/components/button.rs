//! Buttons

use dioxus::prelude::*;

/// Unstyled button. Swallows clicks while disabled and can keep focus where
/// it is, which the select and number input need for their inline controls.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    /// Prevent the button from taking focus on mousedown
    #[props(default)]
    keep_focus: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            tabindex: if keep_focus { Some("-1") } else { None },
            onmousedown: move |e: MouseEvent| {
                if keep_focus {
                    e.prevent_default();
                }
            },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background
    Primary,
    /// Gray background
    Secondary,
    /// Text only
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-indigo-600 hover:bg-indigo-500 text-white disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonVariant::Secondary => {
                "bg-gray-700 hover:bg-gray-600 text-gray-300 disabled:opacity-50 disabled:cursor-not-allowed"
            }
            ButtonVariant::Ghost => {
                "text-gray-400 hover:text-white hover:bg-gray-700/50 disabled:opacity-50"
            }
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Small => "text-sm px-3 py-1.5",
            ButtonSize::Medium => "px-4 py-2",
        }
    }
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let computed_class = format!(
        "inline-flex items-center gap-2 rounded-lg transition-colors {} {} {}",
        size.class(),
        variant.class(),
        class.as_deref().unwrap_or_default(),
    );

    rsx! {
        ChromelessButton { disabled, class: Some(computed_class), onclick, {children} }
    }
}
