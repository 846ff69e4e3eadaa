use dioxus::prelude::*;

use crate::context::{get_newsletter, get_site};
use crate::pages::{Index, PageNotFound};
use inkfox_ui::theme::global_styles;

/// Application routes.
///
/// - `/` - The catalog landing page
/// - anything else - Not-found panel linking home
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Index {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, site and newsletter context, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(get_site);
    use_hook(|| {
        // Without a mailing list the signup form reports itself unavailable
        if let Some(newsletter) = get_newsletter() {
            provide_context(newsletter);
        }
    });

    rsx! {
        style { {global_styles()} }
        Router::<Route> {}
    }
}
