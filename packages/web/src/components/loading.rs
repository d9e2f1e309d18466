//! Loading components

use dioxus::prelude::*;

/// Block loading spinner
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-12",
            role: "status",
            div { class: "w-10 h-10 border-4 border-blue-200 border-t-blue-600 rounded-full animate-spin" }
            p { class: "mt-4 text-sm text-gray-500", "{label}" }
        }
    }
}

/// Inline progress indicator for buttons
#[component]
pub fn LoadingDots() -> Element {
    rsx! {
        div {
            class: "inline-flex space-x-1",
            aria_label: "Loading",
            div { class: "w-2 h-2 bg-white rounded-full animate-bounce" }
            div { class: "w-2 h-2 bg-white rounded-full animate-bounce", style: "animation-delay: 0.1s" }
            div { class: "w-2 h-2 bg-white rounded-full animate-bounce", style: "animation-delay: 0.2s" }
        }
    }
}
