//! Content records and the literal site copy.
//!
//! These types define the data model for the landing page. They're designed
//! to be:
//!
//! - **Serializable** - easy JSON import/export via serde
//! - **Clone-friendly** - components take owned values, no borrowing issues
//! - **Structurally comparable** - `PartialEq` for golden-output checks
//!
//! The constructors below are the single source of truth for the page copy.
//! They are pure: no input, no side effects, and two calls always produce
//! structurally equal values.

use serde::{Deserialize, Serialize};

/// Title/description pair rendered by the hero block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Headline of the page
    pub title: String,
    /// Supporting paragraph under the headline
    pub description: String,
}

/// One feature card: a short claim and its supporting paragraph.
///
/// Cards render in sequence order; the order is display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Card heading
    pub title: String,
    /// Card body text
    pub paragraph: String,
}

/// Document-level metadata: HTML `<title>` and meta description.
///
/// Consumed once per render by the document shell. This replaces the hosting
/// framework's metadata export with an explicit value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Browser tab / SEO title
    pub title: String,
    /// SEO meta description
    pub description: String,
}

/// Heading shown above the feature cards.
pub const FEATURES_HEADING: &str = "Why choose free online tool?";

/// Metadata for the home document.
pub fn page_metadata() -> PageMetadata {
    PageMetadata {
        title: "free online tool".into(),
        description: "Helping you work efficiently: Free online tool platform".into(),
    }
}

/// Hero copy for the home page.
pub fn hero_content() -> HeroContent {
    HeroContent {
        title: "free online tool".into(),
        description: "The free online tool platform provides convenient and practical tools \
                      that require no installation and can be used online anytime and anywhere \
                      to help you simplify tasks and easily complete daily operations."
            .into(),
    }
}

/// The three feature cards, in display order.
pub fn feature_items() -> Vec<FeatureItem> {
    vec![
        FeatureItem {
            title: "No installation required".into(),
            paragraph: "Easy and convenient, no complicated installation process required, \
                        just click and use, get started quickly."
                .into(),
        },
        FeatureItem {
            title: "Online use anytime, anywhere:".into(),
            paragraph: "Flexible and free, you can use the tool anytime, anywhere via the \
                        Internet, conveniently and quickly."
                .into(),
        },
        FeatureItem {
            title: "Data security".into(),
            paragraph: "Strictly protect user data privacy and take security measures to \
                        ensure that your use process is safe and reliable."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metadata_is_stable() {
        let expected = PageMetadata {
            title: "free online tool".into(),
            description: "Helping you work efficiently: Free online tool platform".into(),
        };
        assert_eq!(page_metadata(), expected);
    }

    #[test]
    fn hero_copy_matches_the_site_headline() {
        let hero = hero_content();
        assert_eq!(hero.title, "free online tool");
        assert_eq!(
            hero.description,
            "The free online tool platform provides convenient and practical tools that \
             require no installation and can be used online anytime and anywhere to help \
             you simplify tasks and easily complete daily operations."
        );
    }

    #[test]
    fn three_feature_cards_in_display_order() {
        let items = feature_items();
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();

        assert_eq!(
            titles,
            vec![
                "No installation required",
                "Online use anytime, anywhere:",
                "Data security",
            ]
        );
        assert!(items.iter().all(|i| !i.title.is_empty() && !i.paragraph.is_empty()));
    }

    #[test]
    fn construction_is_idempotent() {
        assert_eq!(page_metadata(), page_metadata());
        assert_eq!(hero_content(), hero_content());
        assert_eq!(feature_items(), feature_items());
    }
}
