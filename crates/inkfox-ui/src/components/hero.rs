//! Hero Banner Component

use dioxus::prelude::*;
use inkfox_core::HeroConfig;

/// Properties for the Hero component
#[derive(Props, Clone, PartialEq)]
pub struct HeroProps {
    pub hero: HeroConfig,
}

/// Full-viewport opening banner.
///
/// Layers, back to front: background image, gradient shade, two animated
/// glitch lines, then the centered title block with both calls to action.
/// A chevron at the bottom links to the scroll target.
#[component]
pub fn Hero(props: HeroProps) -> Element {
    let hero = &props.hero;

    rsx! {
        section { class: "hero",
            div { class: "hero__backdrop",
                img {
                    class: "hero__image",
                    src: "{hero.background}",
                    alt: "{hero.background_alt}",
                }
                div { class: "hero__shade" }
            }

            div { class: "hero__lines",
                div { class: "glitch-line glitch-line--upper" }
                div { class: "glitch-line glitch-line--lower" }
            }

            div { class: "hero__content",
                p { class: "hero__eyebrow editorial-text", "{hero.eyebrow}" }
                h1 { class: "hero__title",
                    span { class: "hero__title-plain", "{hero.title}" }
                    span { class: "hero__title-accent neon", "{hero.title_accent}" }
                }
                p { class: "hero__tagline", "{hero.tagline}" }

                div { class: "hero__actions",
                    a { class: "cta cta--primary", href: "{hero.primary_cta.href}",
                        "{hero.primary_cta.label}"
                    }
                    a { class: "cta cta--secondary", href: "{hero.secondary_cta.href}",
                        "{hero.secondary_cta.label}"
                    }
                }
            }

            a {
                class: "hero__scroll",
                href: "{hero.scroll_target}",
                "aria-label": "Scroll to content",
                "\u{2304}"
            }
        }
    }
}
