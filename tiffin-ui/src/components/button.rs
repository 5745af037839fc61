//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and for the overlay icons.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] test_id: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: "button",
            disabled,
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            "data-testid": test_id.as_deref(),
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Red background - for the main call to action
    Primary,
    /// White background with red outline - the ADD control
    Outline,
    /// Translucent white - icon buttons over the header image
    Overlay,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    /// Square, for a single icon
    Icon,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] test_id: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 font-semibold transition-colors";

    let shape = match size {
        ButtonSize::Small => "px-6 py-1 text-sm rounded-md",
        ButtonSize::Medium => "px-4 py-3 rounded-lg",
        ButtonSize::Icon => "h-10 w-10 rounded-full",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-red-600 hover:bg-red-700 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Outline => "bg-white border border-red-600 text-red-600 hover:bg-red-50",
        ButtonVariant::Overlay => "bg-white/20 backdrop-blur-sm hover:bg-white/30 text-white",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {shape} {variant_class} {extra}"),
        None => format!("{base} {shape} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            aria_label,
            test_id,
            class: Some(computed_class),
            onclick,
            {children}
        }
    }
}
