//! Whole-page configuration: hero, sections and footer.
//!
//! A [`Site`] is loaded once at startup, either from the built-in InkFox
//! content or from a JSON file, and is never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::catalog::{GridLayout, PromoItem, Section, SectionTrailer};
use crate::error::{SiteError, SiteResult};

/// A labelled hyperlink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Static content of the hero banner
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub background: String,
    pub background_alt: String,
    /// Small line above the title
    pub eyebrow: String,
    /// Plain part of the title ("INK")
    pub title: String,
    /// Neon accent part of the title ("FOX")
    pub title_accent: String,
    pub tagline: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    /// href of the scroll hint at the bottom of the banner
    pub scroll_target: String,
}

/// Social networks with a known icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialNetwork {
    Instagram,
    Twitter,
    Email,
}

impl SocialNetwork {
    /// Accessible label for the icon link
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Email => "Email",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: String,
}

/// Static content of the footer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterConfig {
    /// Anchor id of the footer itself
    pub id: String,
    pub brand: String,
    pub brand_accent: String,
    pub blurb: String,
    pub nav_heading: String,
    /// Navigation labels; each links to `#{anchor_for(label)}`
    pub nav_labels: Vec<String>,
    pub newsletter_heading: String,
    pub newsletter_blurb: String,
    pub newsletter_placeholder: String,
    pub newsletter_button: String,
    pub socials: Vec<SocialLink>,
    pub legal_links: Vec<Link>,
    pub copyright_holder: String,
    pub copyright_year: i32,
}

impl FooterConfig {
    /// Copyright line for the legal bar
    pub fn copyright_line(&self) -> String {
        format!(
            "\u{00A9} {} {}. All rights reserved.",
            self.copyright_year, self.copyright_holder
        )
    }

    /// Navigation entries as (label, anchor) pairs, in label order
    pub fn nav_entries(&self) -> Vec<(String, String)> {
        self.nav_labels
            .iter()
            .map(|label| (label.clone(), anchor_for(label)))
            .collect()
    }
}

/// Complete configuration of the landing page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Document/window title
    pub title: String,
    pub hero: HeroConfig,
    /// Sections in page order
    pub sections: Vec<Section>,
    pub footer: FooterConfig,
}

/// In-page anchor for a navigation label.
///
/// Lower-cases the label and joins whitespace-separated words with `-`.
/// Plain lower-casing would leave spaces in multi-word labels, which cannot
/// appear in an element id; single-word labels come out the same either way.
pub fn anchor_for(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

impl Site {
    /// Parse and validate a site from JSON text.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        let site: Site = serde_json::from_str(json)?;
        site.validate()?;
        Ok(site)
    }

    /// Read, parse and validate a site file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let site = Self::from_json(&json)?;
        tracing::debug!(
            "Loaded site '{}' from {:?} ({} sections)",
            site.title,
            path,
            site.sections.len()
        );
        Ok(site)
    }

    pub fn to_json_pretty(&self) -> SiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check section ids and item fields.
    ///
    /// Section ids must already be in anchor form, unique, and distinct from
    /// the footer's id so every element id on the page is unique.
    pub fn validate(&self) -> SiteResult<()> {
        let mut seen = HashSet::new();
        for (position, section) in self.sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(SiteError::EmptySectionId(position));
            }
            let expected = anchor_for(&section.id);
            if expected != section.id {
                return Err(SiteError::SectionIdNotAnchor {
                    id: section.id.clone(),
                    expected,
                });
            }
            if section.id == self.footer.id {
                return Err(SiteError::SectionIdUsedByFooter(section.id.clone()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SiteError::DuplicateSectionId(section.id.clone()));
            }
            section.validate()?;
        }
        Ok(())
    }

    /// Every anchor id an element on the page registers.
    pub fn anchors(&self) -> Vec<&str> {
        self.sections
            .iter()
            .map(|s| s.id.as_str())
            .chain(std::iter::once(self.footer.id.as_str()))
            .collect()
    }

    /// Footer navigation anchors with no matching element on the page.
    pub fn dangling_anchors(&self) -> Vec<String> {
        let anchors = self.anchors();
        self.footer
            .nav_entries()
            .into_iter()
            .map(|(_, anchor)| anchor)
            .filter(|anchor| !anchors.contains(&anchor.as_str()))
            .collect()
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Total number of promotional items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// The built-in InkFox site.
    pub fn builtin() -> Self {
        Self {
            title: "InkFox Publishing".to_string(),
            hero: builtin_hero(),
            sections: vec![builtin_books(), builtin_universes(), builtin_prints()],
            footer: builtin_footer(),
        }
    }
}

fn builtin_hero() -> HeroConfig {
    HeroConfig {
        background: "assets/hero-bg.jpg".to_string(),
        background_alt: "InkFox Hero".to_string(),
        eyebrow: "Boutique Storytelling & Publishing".to_string(),
        title: "INK".to_string(),
        title_accent: "FOX".to_string(),
        tagline: "Where dark narratives meet luminous design. \
                  Discover stories that glow in the urban night."
            .to_string(),
        primary_cta: Link::new("Explore Stories", "#books"),
        secondary_cta: Link::new("Our Universe", "#about"),
        scroll_target: "#books".to_string(),
    }
}

fn builtin_books() -> Section {
    Section::new("books", "01 \u{2014} Publications", "BOOKS").with_items(vec![
        PromoItem::new(
            "assets/book-cover-1.jpg",
            "Shadows of Neon",
            "A noir thriller set in the flickering underbelly of a city that never sleeps.",
            "Novel",
        ),
        PromoItem::new(
            "assets/book-cover-2.jpg",
            "Electric Dreams",
            "Lost souls navigate the maze of towering lights and forgotten alleys.",
            "Anthology",
        ),
        PromoItem::new(
            "assets/book-cover-3.jpg",
            "The Watcher",
            "Something observes from beyond the geometric veil of our reality.",
            "Graphic Novel",
        ),
    ])
}

fn builtin_universes() -> Section {
    Section::new("universes", "02 \u{2014} Story Worlds", "UNIVERSES")
        .with_layout(GridLayout::Diptych)
        .with_items(vec![PromoItem::new(
            "assets/print-1.jpg",
            "Noir City",
            "An interconnected world of rain-slicked streets and desperate heroes.",
            "Universe",
        )])
        .with_trailer(SectionTrailer::Description {
            text: "Our universes are interconnected story worlds where characters cross paths \
                   and narratives interweave. Each book adds a new thread to the tapestry."
                .to_string(),
            link_label: "Explore All Universes".to_string(),
            link_href: "#universes".to_string(),
        })
}

fn builtin_prints() -> Section {
    Section::new("prints", "03 \u{2014} Limited Editions", "PRINTS")
        .with_items(vec![PromoItem::new(
            "assets/print-2.jpg",
            "Ink Burst",
            "Limited edition gicl\u{00E9}e print on archival paper. Edition of 50.",
            "Art Print",
        )])
        .with_trailer(SectionTrailer::ComingSoon {
            label: "More Coming Soon".to_string(),
        })
}

fn builtin_footer() -> FooterConfig {
    FooterConfig {
        id: "about".to_string(),
        brand: "INK".to_string(),
        brand_accent: "FOX".to_string(),
        blurb: "A boutique publishing house crafting dark, beautiful stories \
                that illuminate the shadows of the urban landscape."
            .to_string(),
        nav_heading: "NAVIGATE".to_string(),
        nav_labels: ["Books", "Universes", "Prints", "Submissions", "Contact"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        newsletter_heading: "STAY CONNECTED".to_string(),
        newsletter_blurb:
            "Join our mailing list for exclusive releases and behind-the-scenes content."
                .to_string(),
        newsletter_placeholder: "your@email.com".to_string(),
        newsletter_button: "JOIN".to_string(),
        socials: [
            SocialNetwork::Instagram,
            SocialNetwork::Twitter,
            SocialNetwork::Email,
        ]
        .into_iter()
        .map(|network| SocialLink {
            network,
            href: "#".to_string(),
        })
        .collect(),
        legal_links: vec![
            Link::new("Privacy Policy", "#"),
            Link::new("Terms of Service", "#"),
        ],
        copyright_holder: "InkFox Publishing".to_string(),
        copyright_year: chrono::Local::now().year(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_for_lowercases_and_joins() {
        assert_eq!(anchor_for("Books"), "books");
        assert_eq!(anchor_for("Contact"), "contact");
        assert_eq!(anchor_for("Story  Worlds"), "story-worlds");
        assert_eq!(anchor_for("  Prints "), "prints");
    }

    #[test]
    fn builtin_is_valid() {
        let site = Site::builtin();
        site.validate().unwrap();
        assert_eq!(site.sections.len(), 3);
        assert_eq!(site.item_count(), 5);
    }

    #[test]
    fn builtin_section_order() {
        let site = Site::builtin();
        let ids: Vec<_> = site.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["books", "universes", "prints"]);
    }

    #[test]
    fn builtin_trailers() {
        let site = Site::builtin();
        assert!(site.section("books").unwrap().trailer.is_none());
        assert_eq!(
            site.section("universes").unwrap().trailer.as_ref().map(|t| t.kind()),
            Some("description")
        );
        assert_eq!(
            site.section("prints").unwrap().trailer.as_ref().map(|t| t.kind()),
            Some("coming_soon")
        );
    }

    #[test]
    fn builtin_dangling_anchors() {
        let site = Site::builtin();
        assert_eq!(site.dangling_anchors(), vec!["submissions", "contact"]);
    }

    #[test]
    fn hero_secondary_cta_targets_footer() {
        let site = Site::builtin();
        assert_eq!(site.hero.secondary_cta.href, format!("#{}", site.footer.id));
    }

    #[test]
    fn nav_entries_follow_label_order() {
        let footer = Site::builtin().footer;
        let anchors: Vec<_> = footer.nav_entries().into_iter().map(|(_, a)| a).collect();
        assert_eq!(
            anchors,
            vec!["books", "universes", "prints", "submissions", "contact"]
        );
    }

    #[test]
    fn copyright_line_format() {
        let mut footer = Site::builtin().footer;
        footer.copyright_year = 2024;
        assert_eq!(
            footer.copyright_line(),
            "\u{00A9} 2024 InkFox Publishing. All rights reserved."
        );
    }

    #[test]
    fn json_roundtrip_preserves_site() {
        let site = Site::builtin();
        let json = site.to_json_pretty().unwrap();
        let parsed = Site::from_json(&json).unwrap();
        assert_eq!(parsed, site);
    }

    #[test]
    fn duplicate_section_id_rejected() {
        let mut site = Site::builtin();
        site.sections[2].id = "books".to_string();
        assert!(matches!(
            site.validate(),
            Err(SiteError::DuplicateSectionId(id)) if id == "books"
        ));
    }

    #[test]
    fn section_id_matching_footer_rejected() {
        let mut site = Site::builtin();
        site.sections[2].id = "about".to_string();
        assert!(matches!(
            site.validate(),
            Err(SiteError::SectionIdUsedByFooter(id)) if id == "about"
        ));
    }

    #[test]
    fn section_id_must_be_anchor_form() {
        let mut site = Site::builtin();
        site.sections[0].id = "new releases".to_string();
        match site.validate() {
            Err(SiteError::SectionIdNotAnchor { id, expected }) => {
                assert_eq!(id, "new releases");
                assert_eq!(expected, "new-releases");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        site.sections[0].id = "Books".to_string();
        assert!(matches!(
            site.validate(),
            Err(SiteError::SectionIdNotAnchor { .. })
        ));
    }

    #[test]
    fn anchored_section_id_matches_nav_label() {
        let mut site = Site::builtin();
        site.sections[0].id = "new-releases".to_string();
        site.footer.nav_labels[0] = "New Releases".to_string();
        site.validate().unwrap();
        assert_eq!(site.dangling_anchors(), vec!["submissions", "contact"]);
    }

    #[test]
    fn empty_section_id_rejected() {
        let mut site = Site::builtin();
        site.sections[1].id = " ".to_string();
        assert!(matches!(site.validate(), Err(SiteError::EmptySectionId(1))));
    }

    #[test]
    fn from_json_validates() {
        let mut site = Site::builtin();
        site.sections[0].items[0].title.clear();
        let json = serde_json::to_string(&site).unwrap();
        assert!(matches!(
            Site::from_json(&json),
            Err(SiteError::EmptyItemField { index: 0, field: "title", .. })
        ));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(Site::from_json("{ nope"), Err(SiteError::Json(_))));
    }
}
