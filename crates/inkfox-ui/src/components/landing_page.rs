//! Landing Page
//!
//! Hero, then every configured section in order, then the footer.

use dioxus::prelude::*;
use inkfox_core::Site;

use super::{Footer, Hero, StorySection, TrailingPanel};

/// Properties for the LandingPage component
#[derive(Props, Clone, PartialEq)]
pub struct LandingPageProps {
    pub site: Site,
}

/// The whole catalog page.
#[component]
pub fn LandingPage(props: LandingPageProps) -> Element {
    let site = &props.site;

    rsx! {
        div { class: "landing",
            main {
                Hero { hero: site.hero.clone() }

                div { class: "story-sections",
                    for section in site.sections.iter() {
                        StorySection {
                            key: "{section.id}",
                            id: section.id.clone(),
                            label: section.label.clone(),
                            heading: section.heading.clone(),
                            items: section.items.clone(),
                            layout: section.layout,
                            trailing: section
                                .trailer
                                .clone()
                                .map(|panel| rsx! { TrailingPanel { panel: panel } }),
                        }
                    }
                }
            }

            Footer { footer: site.footer.clone() }
        }
    }
}
