//! Root document component - the complete HTML page.

use crate::content::PageMetadata;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// The complete HTML document for a page.
///
/// The `<head>` is populated from the given [`PageMetadata`]; the page body
/// is supplied as children. Styles and the app script are inlined so the
/// output stays a single self-contained file.
#[component]
pub fn PageDocument(meta: PageMetadata, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                {children()}
                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Application logic (scroll-to-top visibility and smooth scrolling)
const APP_SCRIPT: &str = r#"
(() => {
  const btn = document.getElementById('scroll-top');
  if (!btn) return;

  const onScroll = () => {
    btn.classList.toggle('visible', window.scrollY > 300);
  };
  window.addEventListener('scroll', onScroll, { passive: true });
  onScroll();

  btn.addEventListener('click', () => {
    window.scrollTo({ top: 0, behavior: 'smooth' });
  });
})();
"#;
