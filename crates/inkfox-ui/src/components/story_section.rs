//! Story Section Component
//!
//! Anchored section header followed by a responsive grid of story cards.

use dioxus::prelude::*;
use inkfox_core::{GridLayout, PromoItem};

use super::StoryCard;

/// Properties for the StorySection component
#[derive(Props, Clone, PartialEq)]
pub struct StorySectionProps {
    /// In-page anchor id
    pub id: String,
    /// Ordinal label above the heading ("01 — Publications")
    pub label: String,
    pub heading: String,
    /// Items in display order
    pub items: Vec<PromoItem>,
    #[props(default)]
    pub layout: GridLayout,
    /// Extra panel appended after the cards
    #[props(default)]
    pub trailing: Option<Element>,
}

/// Section of promotional cards.
///
/// Cards appear in item order, keyed by position. The column count follows
/// the viewport but never changes that order. An empty item list still
/// renders the full header.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StorySection {
///         id: "prints".to_string(),
///         label: "03 — Limited Editions".to_string(),
///         heading: "PRINTS".to_string(),
///         items: prints,
///         trailing: rsx! {
///             TrailingPanel {
///                 panel: SectionTrailer::ComingSoon { label: "More Coming Soon".to_string() }
///             }
///         },
///     }
/// }
/// ```
#[component]
pub fn StorySection(props: StorySectionProps) -> Element {
    let grid_class = props.layout.class();
    let modifier = props.layout.card_modifier().map(str::to_string);

    rsx! {
        section { id: "{props.id}", class: "story-section",
            div { class: "container",
                header { class: "section-header",
                    span { class: "section-header__label editorial-text", "{props.label}" }
                    h2 { class: "section-header__heading", "{props.heading}" }
                    div { class: "section-header__rule" }
                }

                div { class: "{grid_class}",
                    for (index, item) in props.items.iter().enumerate() {
                        StoryCard {
                            key: "{index}",
                            item: item.clone(),
                            class: modifier.clone(),
                        }
                    }

                    if let Some(trailing) = &props.trailing {
                        {trailing.clone()}
                    }
                }
            }
        }
    }
}
