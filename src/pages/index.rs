//! Index page - the catalog landing page.

use dioxus::prelude::*;
use inkfox_ui::LandingPage;

use crate::context::use_site;

/// Landing page route.
#[component]
pub fn Index() -> Element {
    let site = use_site();

    rsx! {
        LandingPage { site: site.clone() }
    }
}
