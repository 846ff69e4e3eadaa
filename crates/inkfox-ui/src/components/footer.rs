//! Site Footer Component
//!
//! Brand blurb, navigation links, newsletter signup, socials and legal bar.

use dioxus::prelude::*;
use inkfox_core::{FooterConfig, SocialNetwork};

use super::NewsletterForm;

/// Properties for the Footer component
#[derive(Props, Clone, PartialEq)]
pub struct FooterProps {
    pub footer: FooterConfig,
}

/// Glyph shown inside a social icon link
pub fn social_glyph(network: SocialNetwork) -> &'static str {
    match network {
        SocialNetwork::Instagram => "\u{25CE}",
        SocialNetwork::Twitter => "\u{1D54F}",
        SocialNetwork::Email => "\u{2709}",
    }
}

/// Three-column footer with legal bar.
///
/// Navigation entries link to `#anchor` where the anchor is derived from the
/// label. Whether an element with that id exists is not checked here.
#[component]
pub fn Footer(props: FooterProps) -> Element {
    let footer = &props.footer;
    let nav_entries = footer.nav_entries();
    let socials: Vec<_> = footer
        .socials
        .iter()
        .map(|s| (s.network.label(), social_glyph(s.network), s.href.clone()))
        .collect();
    let copyright = footer.copyright_line();

    rsx! {
        footer { id: "{footer.id}", class: "site-footer",
            div { class: "container",
                div { class: "site-footer__columns",
                    // Brand
                    div { class: "site-footer__column",
                        div { class: "site-footer__brand",
                            span { "{footer.brand}" }
                            span { class: "neon", "{footer.brand_accent}" }
                        }
                        p { class: "site-footer__text", "{footer.blurb}" }
                    }

                    // Navigation
                    div { class: "site-footer__column",
                        h4 { class: "site-footer__heading", "{footer.nav_heading}" }
                        ul { class: "site-footer__nav",
                            for (index, (label, anchor)) in nav_entries.into_iter().enumerate() {
                                li { key: "{index}",
                                    a { class: "site-footer__link", href: "#{anchor}", "{label}" }
                                }
                            }
                        }
                    }

                    // Newsletter
                    div { class: "site-footer__column",
                        h4 { class: "site-footer__heading", "{footer.newsletter_heading}" }
                        p { class: "site-footer__text", "{footer.newsletter_blurb}" }
                        NewsletterForm {
                            placeholder: footer.newsletter_placeholder.clone(),
                            button_label: footer.newsletter_button.clone(),
                        }

                        div { class: "site-footer__socials",
                            for (index, (label, glyph, href)) in socials.into_iter().enumerate() {
                                a {
                                    key: "{index}",
                                    class: "social-link",
                                    href: "{href}",
                                    "aria-label": "{label}",
                                    "{glyph}"
                                }
                            }
                        }
                    }
                }

                div { class: "site-footer__legal",
                    p { "{copyright}" }
                    div { class: "site-footer__legal-links",
                        for (index, link) in footer.legal_links.iter().enumerate() {
                            a { key: "{index}", class: "site-footer__link", href: "{link.href}", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}
