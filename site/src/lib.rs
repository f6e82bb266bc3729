//! # site-leptos
//!
//! Leptos SSR renderer for the free online tool landing site.
//!
//! The site is pure static HTML: components are rendered once on the server
//! side with [Leptos](https://leptos.dev/) and written to disk, no reactive
//! runtime and no hydration. Page metadata (document title, meta description)
//! is an explicit [`PageMetadata`](content::PageMetadata) value handed to the
//! document shell, not a framework side-channel.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = site_leptos::render_home();
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! // std::fs::write("dist/index.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - content records and the literal site copy
//! - [`components`] - Leptos UI components (document shell + rendering units)
//! - [`pages`] - page compositions (currently just the home page)
//! - [`styles`] - CSS constants inlined into the document head

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod pages;
pub mod styles;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pages::HomePage;

/// Render the home page as a complete HTML document.
///
/// This is the main entry point. Content and metadata are bound here: the
/// literal copy from [`content`] flows into [`HomePage`], and
/// [`content::page_metadata`] populates the document head. The result is a
/// self-contained HTML string including `<!DOCTYPE html>`.
///
/// Rendering cannot fail - the page takes no external input.
pub fn render_home() -> String {
    let meta = content::page_metadata();
    let doc = view! {
        <PageDocument meta=meta>
            <HomePage />
        </PageDocument>
    };

    let html = doc.to_html();

    // to_html() omits the doctype
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_complete_document() {
        let html = render_home();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<head>"));
        assert!(html.contains("<body>"));
    }

    #[test]
    fn head_carries_page_metadata() {
        let html = render_home();

        assert!(html.contains("<title>"));
        assert!(html.contains("free online tool"));
        assert!(html.contains("Helping you work efficiently: Free online tool platform"));
    }

    #[test]
    fn units_render_in_fixed_order() {
        let html = render_home();

        // Class/id attributes only occur in the body markup, never in the
        // inlined CSS, so string positions give the render order.
        let scroll = html.find(r#"id="scroll-top""#).expect("scroll affordance");
        let hero = html.find(r#"class="hero-title""#).expect("hero block");
        let features = html.find(r#"class="features-grid""#).expect("features block");

        assert!(scroll < hero, "scroll affordance must precede the hero");
        assert!(hero < features, "hero must precede the features block");
    }

    #[test]
    fn features_block_renders_heading_and_three_cards() {
        let html = render_home();

        assert!(html.contains("Why choose free online tool?"));
        assert_eq!(html.matches(r#"class="feature-card""#).count(), 3);
    }

    #[test]
    fn rendering_twice_is_deterministic() {
        assert_eq!(render_home(), render_home());
    }
}
