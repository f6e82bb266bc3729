//! Leptos UI components for the landing site.
//!
//! Each component is a Leptos `#[component]` function. Rendering units take
//! owned content values and pass them through without validation; the
//! document shell is the only component that touches page metadata.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── HomePage (src/pages)
//!     ├── ScrollUp
//!     ├── Hero
//!     └── Features
//!         └── FeatureCard (per item)
//! ```

mod document;
mod features;
mod hero;
mod scroll_up;

pub use document::PageDocument;
pub use features::Features;
pub use hero::Hero;
pub use scroll_up::ScrollUp;
