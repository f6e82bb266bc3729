//! Hero block - headline and supporting copy.

use crate::content::HeroContent;
use leptos::prelude::*;

/// Title/description block at the top of the page.
///
/// Pass-through contract: renders whatever it is given, no validation.
#[component]
pub fn Hero(data: HeroContent) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title">{data.title}</h1>
                <p class="hero-description">{data.description}</p>
            </div>
        </section>
    }
}
