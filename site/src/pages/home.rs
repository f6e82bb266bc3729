// Home page - scroll affordance + hero + feature cards
use crate::components::{Features, Hero, ScrollUp};
use crate::content;
use leptos::prelude::*;

/// The landing page: fixed-order composition of the three rendering units.
#[component]
pub fn HomePage() -> impl IntoView {
    let hero = content::hero_content();
    let features = content::feature_items();

    view! {
        <ScrollUp />
        <Hero data=hero />
        <Features paragraph=content::FEATURES_HEADING.to_string() data=features />
    }
}
