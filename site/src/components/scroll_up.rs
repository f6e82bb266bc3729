//! Scroll-to-top affordance.

use leptos::prelude::*;

/// Floating button that scrolls the page back to the top.
///
/// Renders hidden; the document app script toggles visibility on scroll and
/// wires the click handler.
#[component]
pub fn ScrollUp() -> impl IntoView {
    view! {
        <button id="scroll-top" class="scroll-top" aria-label="Scroll to top">
            "\u{2191}"
        </button>
    }
}
