//! Fallback for unknown routes.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        main { class: "not-found",
            h1 { class: "section-header__heading", "LOST IN THE DARK" }
            p { class: "editorial-text", "Nothing lives at /{path}." }
            Link { class: "cta cta--primary", to: Route::Index {}, "Back to the catalog" }
        }
    }
}
