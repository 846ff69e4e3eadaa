//! Trailing panels rendered after a section's card grid.

use dioxus::prelude::*;
use inkfox_core::SectionTrailer;

/// Renders a [`SectionTrailer`] as a non-card panel.
#[component]
pub fn TrailingPanel(panel: SectionTrailer) -> Element {
    match panel {
        SectionTrailer::Description {
            text,
            link_label,
            link_href,
        } => rsx! {
            div { class: "trailing-panel trailing-panel--description",
                p { class: "trailing-panel__text", "{text}" }
                a { class: "trailing-panel__link", href: "{link_href}",
                    "{link_label}"
                    span { class: "trailing-panel__arrow", "\u{2192}" }
                }
            }
        },
        SectionTrailer::ComingSoon { label } => rsx! {
            div { class: "trailing-panel trailing-panel--coming-soon",
                span { class: "trailing-panel__plus", "+" }
                span { class: "trailing-panel__label editorial-text", "{label}" }
            }
        },
    }
}
