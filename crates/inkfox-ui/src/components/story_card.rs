//! Story Card Component
//!
//! One promotional item as a 3:4 cover with hover decorations.

use dioxus::prelude::*;
use inkfox_core::PromoItem;

/// Properties for the StoryCard component
#[derive(Props, Clone, PartialEq)]
pub struct StoryCardProps {
    /// Item to display
    pub item: PromoItem,
    /// Optional layout modifier class (e.g. `story-card--wide`)
    #[props(default)]
    pub class: Option<String>,
}

/// Promotional card: cover image, category badge, title and subtitle.
///
/// # Design Notes
///
/// - Cover scales up and the gradient overlay darkens on hover
/// - Neon corner accents fade in on hover
/// - Subtitle is clamped to two lines by CSS; the markup keeps the full text
///
/// An unreachable image falls back to the webview's broken-image state.
#[component]
pub fn StoryCard(props: StoryCardProps) -> Element {
    let item = &props.item;
    let card_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("story-card {}", extra),
        _ => "story-card".to_string(),
    };

    rsx! {
        article { class: "{card_class}",
            div { class: "story-card__media",
                img {
                    class: "story-card__image",
                    src: "{item.image}",
                    alt: "{item.title}",
                    "loading": "lazy",
                }
                div { class: "story-card__overlay" }
                span { class: "story-card__badge", "{item.category}" }

                // Hover accents
                div { class: "story-card__corner story-card__corner--top" }
                div { class: "story-card__corner story-card__corner--bottom" }
            }

            div { class: "story-card__body",
                h3 { class: "story-card__title", "{item.title}" }
                p { class: "story-card__subtitle", "{item.subtitle}" }
            }
        }
    }
}
