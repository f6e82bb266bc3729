//! CSS styles for the landing site.
//!
//! The complete stylesheet is a single constant inlined into the document
//! head, so the rendered page stays a self-contained file with no external
//! asset requests.
//!
//! To extend or override styles:
//!
//! ```rust
//! use site_leptos::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete CSS for the landing site - clean light marketing theme.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-soft: #f6f8fb;
    --text: #1f2430;
    --text-dim: #5b6372;
    --accent: #2f6fed;
    --accent-soft: #e4edff;
    --border: #e3e7ee;
    --radius: 10px;
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", "Segoe UI", system-ui, -apple-system, sans-serif;
    line-height: 1.6;
}

.container {
    max-width: 1080px;
    margin: 0 auto;
    padding: 0 24px;
}

/* Hero */
.hero {
    background: linear-gradient(180deg, var(--accent-soft) 0%, var(--bg) 100%);
    padding: 120px 0 80px;
    text-align: center;
}

.hero-title {
    margin: 0 0 20px;
    font-size: 44px;
    font-weight: 700;
    letter-spacing: -0.5px;
    text-transform: capitalize;
}

.hero-description {
    margin: 0 auto;
    max-width: 720px;
    font-size: 18px;
    color: var(--text-dim);
}

/* Features */
.features {
    padding: 80px 0;
    background: var(--bg-soft);
}

.section-header {
    text-align: center;
    margin-bottom: 48px;
}

.section-title {
    margin: 0;
    font-size: 32px;
    font-weight: 700;
}

.features-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 24px;
}

.feature-card {
    background: var(--bg);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 32px 28px;
}

.feature-title {
    margin: 0 0 12px;
    font-size: 20px;
    font-weight: 600;
}

.feature-paragraph {
    margin: 0;
    color: var(--text-dim);
    font-size: 15px;
}

/* Scroll-to-top affordance */
.scroll-top {
    position: fixed;
    right: 28px;
    bottom: 28px;
    width: 44px;
    height: 44px;
    border: none;
    border-radius: 50%;
    background: var(--accent);
    color: #fff;
    font-size: 18px;
    cursor: pointer;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.2s ease;
}

.scroll-top.visible {
    opacity: 1;
    pointer-events: auto;
}

@media (max-width: 640px) {
    .hero {
        padding: 80px 0 56px;
    }

    .hero-title {
        font-size: 32px;
    }

    .section-title {
        font-size: 26px;
    }
}
"#;
