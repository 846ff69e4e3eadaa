//! Context providers for the InkFox desktop app.
//!
//! The site is provided as `&'static Site` so pages can read it without
//! cloning; the newsletter collaborator is provided as an
//! [`inkfox_ui::Newsletter`] when a mailing list is configured.
//!
//! ## Usage
//!
//! ```ignore
//! let site = use_site();
//! rsx! { LandingPage { site: site.clone() } }
//! ```

use dioxus::prelude::*;
use inkfox_core::Site;
use inkfox_ui::Newsletter;

/// Get the site loaded at startup.
pub fn get_site() -> &'static Site {
    crate::get_site()
}

/// Get the newsletter collaborator configured at startup.
pub fn get_newsletter() -> Option<Newsletter> {
    crate::get_newsletter()
}

/// Hook to access the site from context.
pub fn use_site() -> &'static Site {
    use_context::<&'static Site>()
}
