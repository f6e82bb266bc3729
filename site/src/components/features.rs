//! Features block - section heading plus a grid of feature cards.

use crate::content::FeatureItem;
use leptos::prelude::*;

/// Feature card grid with its section heading.
///
/// Cards render in the order of `data`; no fixed length is assumed.
#[component]
pub fn Features(paragraph: String, data: Vec<FeatureItem>) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{paragraph}</h2>
                </div>
                <div class="features-grid">
                    {data
                        .into_iter()
                        .map(|item| view! { <FeatureCard item=item /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(item: FeatureItem) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-title">{item.title}</h3>
            <p class="feature-paragraph">{item.paragraph}</p>
        </article>
    }
}
